mod document;

use std::{
    cell::{Ref, RefCell, RefMut},
    fmt,
    rc::{Rc, Weak},
};

use indexmap::IndexMap;
use masthead_nodes::{Node, NodeType};

pub use document::RenderDocument;

// Reference: https://developer.mozilla.org/en-US/docs/Glossary/Void_element
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// In-memory node. `Display` writes compact HTML; the alternate form (`{:#}`) indents children.
#[derive(Clone, Debug)]
pub struct NodeRef(Rc<RefCell<Inner>>);

type WeakNode = Weak<RefCell<Inner>>;

struct Inner {
    parent: Option<WeakNode>,
    kind: NodeKind,
}

#[derive(Debug)]
pub enum NodeKind {
    Element {
        namespace: Option<String>,
        name: String,
        attrs: IndexMap<String, String>,
        children: Vec<NodeRef>,
    },
    Fragment(Vec<NodeRef>),
    Text(String),
    Raw(String),
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = f.alternate();
        let inner = self.0.borrow();
        match &inner.kind {
            NodeKind::Element {
                namespace,
                name,
                attrs,
                children,
            } => {
                let tag = namespace
                    .as_ref()
                    .map(|ns| format!("{ns}:{name}"))
                    .unwrap_or(name.clone());

                let attrs = attrs
                    .iter()
                    .map(|(name, value)| format!(" {name}=\"{}\"", escape(value)))
                    .collect::<String>();

                if children.is_empty() {
                    return if VOID_ELEMENTS.contains(&tag.to_lowercase().as_str()) {
                        write!(f, "<{tag}{attrs}>")
                    } else {
                        write!(f, "<{tag}{attrs}></{tag}>")
                    };
                }

                if !pretty {
                    write!(f, "<{tag}{attrs}>")?;
                    for child in children {
                        write!(f, "{child}")?;
                    }
                    return write!(f, "</{tag}>");
                }

                // Text-only content stays inline so the text itself is unchanged.
                let flat = self.flat_children();
                if flat
                    .iter()
                    .all(|child| matches!(child.ty(), NodeType::Text | NodeType::Raw))
                {
                    write!(f, "<{tag}{attrs}>")?;
                    for child in &flat {
                        write!(f, "{child}")?;
                    }
                    return write!(f, "</{tag}>");
                }

                let indented = flat
                    .iter()
                    .map(|child| format!("{child:#}"))
                    .flat_map(|out| {
                        out.lines()
                            .map(|line| format!("  {line}"))
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>()
                    .join("\n");

                write!(f, "<{tag}{attrs}>\n{indented}\n</{tag}>")
            }
            NodeKind::Fragment(children) => {
                if pretty {
                    let lines = self
                        .flat_children()
                        .iter()
                        .map(|child| format!("{child:#}"))
                        .collect::<Vec<_>>()
                        .join("\n");
                    return write!(f, "{lines}");
                }

                for child in children {
                    write!(f, "{child}")?;
                }
                Ok(())
            }
            NodeKind::Text(text) => {
                write!(f, "{}", escape(text))
            }
            NodeKind::Raw(raw) => {
                write!(f, "{raw}")
            }
        }
    }
}

impl NodeRef {
    fn new(kind: NodeKind) -> Self {
        let inner = Inner { parent: None, kind };
        Self(Rc::new(RefCell::new(inner)))
    }

    fn children_ref(&self) -> Option<Ref<Vec<Self>>> {
        let inner = self.0.borrow();
        Ref::filter_map(inner, |inner| match &inner.kind {
            NodeKind::Element { children, .. } => Some(children),
            NodeKind::Fragment(children) => Some(children),
            _ => None,
        })
        .ok()
    }

    fn children_mut(&self) -> Option<RefMut<Vec<Self>>> {
        let inner = self.0.borrow_mut();
        RefMut::filter_map(inner, |inner| match &mut inner.kind {
            NodeKind::Element { children, .. } => Some(children),
            NodeKind::Fragment(children) => Some(children),
            _ => None,
        })
        .ok()
    }

    /// Children with every fragment replaced by its own children.
    fn flat_children(&self) -> Vec<Self> {
        let children = match self.children_ref() {
            Some(children) => children.clone(),
            None => return vec![],
        };

        children
            .into_iter()
            .flat_map(|child| {
                if child.ty() == NodeType::Fragment {
                    child.flat_children()
                } else {
                    vec![child]
                }
            })
            .collect()
    }

    /// Finds the first element at or below this node whose `id` attribute equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<Self> {
        if self.attr_ref("id").as_deref() == Some(id) {
            return Some(self.clone());
        }

        let children = self.children_ref()?.clone();
        children.iter().find_map(|child| child.find_by_id(id))
    }

    fn attr_ref(&self, name: &str) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Element { attrs, .. } => attrs.get(name).cloned(),
            _ => None,
        }
    }
}

impl Node for NodeRef {
    fn element(namespace: Option<&str>, name: &str) -> Self {
        let kind = NodeKind::Element {
            namespace: namespace.map(str::to_string),
            name: name.to_string(),
            attrs: IndexMap::new(),
            children: vec![],
        };
        Self::new(kind)
    }

    fn text() -> Self {
        let kind = NodeKind::Text(String::new());
        Self::new(kind)
    }

    fn fragment() -> Self {
        let kind = NodeKind::Fragment(vec![]);
        Self::new(kind)
    }

    fn raw() -> Self {
        let kind = NodeKind::Raw(String::new());
        Self::new(kind)
    }

    fn ty(&self) -> NodeType {
        match &self.0.borrow().kind {
            NodeKind::Element { .. } => NodeType::Element,
            NodeKind::Fragment(_) => NodeType::Fragment,
            NodeKind::Text(_) => NodeType::Text,
            NodeKind::Raw(_) => NodeType::Raw,
        }
    }

    fn name(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Element { name, .. } => Some(name.clone()),
            _ => None,
        }
    }

    fn parent(&self) -> Option<Self> {
        self.0
            .borrow()
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(NodeRef)
    }

    fn children(&self) -> Vec<Self> {
        self.children_ref()
            .expect("only element and fragment nodes can have children")
            .clone()
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        let children = parent.children_ref()?;

        let idx = children.iter().position(|node| node == self)?;
        children.get(idx + 1).cloned()
    }

    fn insert(&self, child: &Self, before: Option<&Self>) {
        if let Some(old) = child.parent() {
            old.remove(child);
        }

        let mut children = self
            .children_mut()
            .expect("only element and fragment nodes can have children");
        let idx = if let Some(before) = before {
            children
                .iter()
                .position(|node| node == before)
                .expect("not a parent of insertion point node")
        } else {
            children.len()
        };
        children.insert(idx, child.clone());

        child.0.borrow_mut().parent.replace(Rc::downgrade(&self.0));
    }

    fn remove(&self, child: &Self) {
        let mut children = self
            .children_mut()
            .expect("only element and fragment nodes can have children");
        let idx = children
            .iter()
            .position(|node| node == child)
            .expect("not a parent of child node");
        children.remove(idx);

        child.0.borrow_mut().parent.take();
    }

    fn content(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Text(text) => Some(text.clone()),
            NodeKind::Raw(raw) => Some(raw.clone()),
            _ => None,
        }
    }

    fn set_text(&self, content: &str) {
        match &mut self.0.borrow_mut().kind {
            NodeKind::Text(text) => {
                *text = content.to_string();
            }
            NodeKind::Raw(raw) => {
                *raw = content.to_string();
            }
            _ => panic!("can only set text content of text or raw nodes"),
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        if self.ty() != NodeType::Element {
            panic!("attributes only exist on element nodes");
        }
        self.attr_ref(name)
    }

    fn attrs(&self) -> Vec<(String, String)> {
        match &self.0.borrow().kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            _ => vec![],
        }
    }

    fn set_attr(&self, name: &str, value: &str) {
        if let NodeKind::Element { attrs, .. } = &mut self.0.borrow_mut().kind {
            attrs.insert(name.to_string(), value.to_string());
        } else {
            panic!("attributes only exist on element nodes");
        }
    }

    fn remove_attr(&self, name: &str) {
        if let NodeKind::Element { attrs, .. } = &mut self.0.borrow_mut().kind {
            attrs.shift_remove(name);
        } else {
            panic!("attributes only exist on element nodes");
        }
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for NodeRef {}

impl fmt::Debug for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

// Reference: https://cheatsheetseries.owasp.org/cheatsheets/Cross_Site_Scripting_Prevention_Cheat_Sheet.html#output-encoding-for-html-contexts
fn escape(text: &str) -> String {
    let mut output = String::new();
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(c),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use masthead_nodes::{div, fragment, Node};

    use super::NodeRef;

    #[test]
    fn node_behavior() {
        masthead_nodes::behavior_tests!(NodeRef);
    }

    #[test]
    fn compact_output() {
        let text = NodeRef::text();
        text.set_text("a < b");
        let node: NodeRef = div! { class => "x \"y\""; text; div! {}; };

        assert_eq!(
            node.to_string(),
            "<div class=\"x &quot;y&quot;\">a &lt; b<div></div></div>"
        );
    }

    #[test]
    fn pretty_output() {
        let node: NodeRef = div! { "one"; div! { "two"; }; };

        assert_eq!(format!("{node:#}"), "<div>\n  one\n  <div>two</div>\n</div>");
    }

    #[test]
    fn pretty_output_keeps_text_inline() {
        let node: NodeRef = div! {
            fragment! {
                div! { class => "heading"; "header"; };
            };
            div! { fragment! { "a"; "b"; }; };
        };

        let out = format!("{node:#}");
        assert_eq!(
            out,
            "<div>\n  <div class=\"heading\">header</div>\n  <div>ab</div>\n</div>"
        );
        assert!(out.lines().all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn insert_moves_node_between_parents() {
        let child: NodeRef = div! { "x"; };
        let a: NodeRef = div! { child.clone(); };
        let b: NodeRef = div! {};

        b.insert(&child, None);

        assert!(a.children().is_empty());
        assert_eq!(b.children(), vec![child.clone()]);
        assert_eq!(child.parent(), Some(b.clone()));
        assert_eq!(a.to_string(), "<div></div>");
    }

    #[test]
    fn fragments_are_transparent() {
        let node: NodeRef = div! { fragment! { "a"; "b"; }; };

        assert_eq!(node.to_string(), "<div>ab</div>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node: NodeRef = masthead_nodes::base! { href => "./"; };

        assert_eq!(node.to_string(), "<base href=\"./\">");
    }

    #[test]
    fn raw_is_not_escaped() {
        let raw = NodeRef::raw();
        raw.set_text("a > b { color: red }");

        assert_eq!(raw.to_string(), "a > b { color: red }");
    }

    #[test]
    fn find_by_id_searches_descendants() {
        let target: NodeRef = div! { id => "root"; };
        let tree: NodeRef = div! { fragment! { div! { target; }; }; };

        assert_eq!(tree.find_by_id("root"), Some(target));
        assert_eq!(tree.find_by_id("missing"), None);
    }
}
