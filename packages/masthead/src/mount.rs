use masthead_nodes::{Document, Node};

use crate::{StrictMode, View};

/// A view mounted into a container. Dropping it leaves the tree in place.
#[derive(Clone, Debug)]
pub struct Root<N: Node> {
    container: N,
    tree: N,
}

impl<N: Node> Root<N> {
    pub fn container(&self) -> &N {
        &self.container
    }

    pub fn unmount(self) {
        self.container.remove(&self.tree);
    }
}

/// Mounts `view` into the element with id `container_id`, checking for impure renders in debug
/// builds.
///
/// Returns `None` without touching the document when there is no such element.
pub fn mount<D, V>(document: &D, container_id: &str, view: &V) -> Option<Root<D::Node>>
where
    D: Document,
    V: View + ?Sized,
{
    mount_with(document, container_id, view, cfg!(debug_assertions))
}

pub fn mount_with<D, V>(
    document: &D,
    container_id: &str,
    view: &V,
    strict: bool,
) -> Option<Root<D::Node>>
where
    D: Document,
    V: View + ?Sized,
{
    let Some(container) = document.element_by_id(container_id) else {
        log::debug!("no element with id `{container_id}`, skipping mount");
        return None;
    };

    let tree: D::Node = if strict {
        StrictMode::new(view).render()
    } else {
        view.render()
    };

    container.clear();
    container.insert(&tree, None);
    log::debug!("mounted `{}` into #{container_id}", view.name());

    Some(Root { container, tree })
}

#[cfg(test)]
mod tests {
    use masthead_nodes::{div, fragment, Document, Node};
    use masthead_render::{NodeRef, RenderDocument};

    use super::{mount, mount_with};
    use crate::View;

    struct Greeting;

    impl View for Greeting {
        fn render<N: Node>(&self) -> N {
            fragment! {
                div! { class => "greeting"; "hello"; };
            }
        }
    }

    #[test]
    fn mounts_into_container() {
        let document = RenderDocument::with_container("root");

        let root = mount(&document, "root", &Greeting).unwrap();

        let container = document.element_by_id("root").unwrap();
        assert_eq!(root.container(), &container);
        assert!(!container.children().is_empty());
        assert_eq!(container.text_content(), "hello");
        assert_eq!(
            document.body().to_string(),
            "<body><div id=\"root\"><div class=\"greeting\">hello</div></div></body>"
        );
    }

    #[test]
    fn missing_container_is_a_no_op() {
        let document = RenderDocument::with_container("app");
        let before = document.to_string();

        assert!(mount(&document, "root", &Greeting).is_none());
        assert_eq!(document.to_string(), before);
    }

    #[test]
    fn replaces_existing_children() {
        let document = RenderDocument::with_container("root");
        let container = document.element_by_id("root").unwrap();
        let placeholder: NodeRef = div! { "loading"; };
        container.insert(&placeholder, None);

        mount_with(&document, "root", &Greeting, false).unwrap();

        assert_eq!(container.children().len(), 1);
        assert_eq!(placeholder.parent(), None);
        assert_eq!(container.text_content(), "hello");
    }

    #[test]
    fn strictness_does_not_change_output() {
        let strict = RenderDocument::with_container("root");
        let relaxed = RenderDocument::with_container("root");

        mount_with(&strict, "root", &Greeting, true).unwrap();
        mount_with(&relaxed, "root", &Greeting, false).unwrap();

        assert_eq!(strict.to_string(), relaxed.to_string());
    }

    #[test]
    fn unmount_removes_tree() {
        let document = RenderDocument::with_container("root");

        let root = mount(&document, "root", &Greeting).unwrap();
        let container = root.container().clone();
        root.unmount();

        assert!(container.children().is_empty());
    }
}
