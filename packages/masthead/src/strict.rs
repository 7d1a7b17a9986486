use masthead_nodes::{same_shape, Node};

use crate::View;

/// Development wrapper that renders its view twice and warns when the passes disagree.
///
/// The second pass is the one returned, so output is identical with or without the wrapper.
#[derive(Debug)]
pub struct StrictMode<'a, V: ?Sized>(&'a V);

/// Result of a double render.
#[derive(Debug)]
pub struct Checked<N> {
    pub node: N,
    pub pure: bool,
}

impl<'a, V: View + ?Sized> StrictMode<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Self(view)
    }

    pub fn check<N: Node>(&self) -> Checked<N> {
        let first: N = self.0.render();
        let second: N = self.0.render();

        Checked {
            pure: same_shape(&first, &second),
            node: second,
        }
    }
}

impl<V: View + ?Sized> View for StrictMode<'_, V> {
    fn render<N: Node>(&self) -> N {
        let checked = self.check();
        if !checked.pure {
            log::warn!(
                "`{}` rendered different output on a second pass; views must be pure",
                self.0.name()
            );
        }
        checked.node
    }

    fn name(&self) -> &'static str {
        self.0.name()
    }
}
