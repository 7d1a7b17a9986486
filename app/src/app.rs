use masthead::{
    mount_with,
    nodes::{fragment, Document, Node},
    styles::Stylesheet,
    Config, Result, Root, View,
};

use crate::components::{header, Header};

pub const INDEX: Stylesheet = Stylesheet::new("index", include_str!("index.css"));

/// Root view of the application.
#[derive(Clone, Debug)]
pub struct App {
    config: Config,
    header: Header,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let header = Header::from_module()?;
        Ok(Self::with_header(config, header))
    }

    pub fn with_header(config: Config, header: Header) -> Self {
        Self { config, header }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Global stylesheets, in installation order.
    pub fn stylesheets(&self) -> [Stylesheet; 3] {
        [INDEX, header::STYLE, header::MODULE]
    }

    /// Installs the global stylesheets, then mounts into the configured container.
    ///
    /// Leaves the document untouched when the container doesn't exist.
    pub fn boot<D: Document>(&self, document: &D) -> Option<Root<D::Node>> {
        let container = &self.config.container;
        if document.element_by_id(container).is_none() {
            log::debug!("no element with id `{container}`, not booting");
            return None;
        }

        for sheet in self.stylesheets() {
            sheet.install(document);
        }

        mount_with(document, container, self, self.config.strict())
    }
}

impl View for App {
    fn render<N: Node>(&self) -> N {
        fragment! {
            self.header.render();
        }
    }
}
