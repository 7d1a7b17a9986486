#![warn(clippy::use_self)]

mod config;
mod error;
mod mount;
mod strict;

pub use masthead_nodes as nodes;
pub use masthead_styles as styles;

#[cfg(feature = "web")]
pub use masthead_web as web;

#[cfg(feature = "render")]
pub use masthead_render as render;

pub use self::{
    config::{Config, Profile, DEFAULT_CONTAINER},
    error::{Error, Result},
    mount::{mount, mount_with, Root},
    strict::{Checked, StrictMode},
};

use masthead_nodes::Node;

/// A pure description of markup. Rendering the same view twice must produce the same tree.
pub trait View {
    fn render<N: Node>(&self) -> N;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<V: View + ?Sized> View for &V {
    fn render<N: Node>(&self) -> N {
        (**self).render()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

pub mod prelude {
    pub use crate::{
        mount,
        nodes::*,
        styles::{class_names, StyleMap, Stylesheet},
        View,
    };
}
