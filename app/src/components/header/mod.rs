use masthead::{
    nodes::{div, Node},
    styles::{self, class_names, StyleMap, Stylesheet},
    View,
};

pub const STYLE: Stylesheet = Stylesheet::new("header/style", include_str!("style.css"));

/// Compiled CSS for the scoped names in `header.module.json`.
pub const MODULE: Stylesheet = Stylesheet::new("header/module", include_str!("header.module.css"));

const MODULE_MAP: &str = include_str!("header.module.json");

/// Page header: a `div` with the scoped and the global `heading` class.
#[derive(Clone, Debug)]
pub struct Header {
    styles: StyleMap,
}

impl Header {
    pub fn new(styles: StyleMap) -> Self {
        Self { styles }
    }

    /// A header using the style map generated for `header.module.css`.
    pub fn from_module() -> Result<Self, styles::Error> {
        Ok(Self::new(StyleMap::from_json(MODULE_MAP)?))
    }

    pub fn class(&self) -> String {
        class_names([self.styles.get("heading"), "heading"])
    }
}

impl View for Header {
    fn render<N: Node>(&self) -> N {
        div! {
            class => self.class();
            "header";
        }
    }
}
