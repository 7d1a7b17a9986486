use std::fmt;

use masthead_nodes::{element, Document, Node};

use crate::NodeRef;

/// An in-memory HTML document with a `<head>` and a `<body>`.
#[derive(Clone, Debug)]
pub struct RenderDocument {
    html: NodeRef,
    head: NodeRef,
    body: NodeRef,
}

impl RenderDocument {
    pub fn new() -> Self {
        let head: NodeRef = element!("head");
        let body: NodeRef = element!("body");
        let html: NodeRef = element!("html", head; body;);

        Self { html, head, body }
    }

    /// A document whose body holds a single empty `<div>` with the given id.
    pub fn with_container(id: &str) -> Self {
        let document = Self::new();
        let container: NodeRef = masthead_nodes::div! { id => id; };
        document.body.insert(&container, None);
        document
    }

    pub fn body(&self) -> &NodeRef {
        &self.body
    }
}

impl Default for RenderDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for RenderDocument {
    type Node = NodeRef;

    fn element_by_id(&self, id: &str) -> Option<NodeRef> {
        self.html.find_by_id(id)
    }

    fn head(&self) -> Option<NodeRef> {
        Some(self.head.clone())
    }
}

impl fmt::Display for RenderDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "<!DOCTYPE html>\n{:#}", self.html)
        } else {
            write!(f, "<!DOCTYPE html>{}", self.html)
        }
    }
}

#[cfg(test)]
mod tests {
    use masthead_nodes::{Document, Node};

    use super::RenderDocument;

    #[test]
    fn container_lookup() {
        let document = RenderDocument::with_container("root");

        let container = document.element_by_id("root").unwrap();
        assert_eq!(container.name().as_deref(), Some("div"));
        assert_eq!(container.parent().as_ref(), Some(document.body()));
        assert!(document.element_by_id("other").is_none());
    }

    #[test]
    fn empty_shell() {
        let document = RenderDocument::with_container("root");

        assert_eq!(
            document.to_string(),
            "<!DOCTYPE html><html><head></head><body><div id=\"root\"></div></body></html>"
        );
    }
}
