
mod macros;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeType {
    Element,
    Text,
    Fragment,
    Raw,
}

impl NodeType {
    /// Fragments and raw nodes have no native counterpart of their own; their children are spliced
    /// into the parent.
    pub fn is_virtual(self) -> bool {
        matches!(self, Self::Fragment | Self::Raw)
    }
}

pub trait Node: Clone + Sized + 'static {
    fn element(namespace: Option<&str>, name: &str) -> Self;

    fn text() -> Self;

    fn fragment() -> Self;

    fn raw() -> Self;

    fn ty(&self) -> NodeType;

    /// Tag name of an element node, `None` for every other node type.
    fn name(&self) -> Option<String>;

    fn parent(&self) -> Option<Self>;

    fn children(&self) -> Vec<Self>;

    fn next_sibling(&self) -> Option<Self>;

    fn insert(&self, child: &Self, before: Option<&Self>);

    fn remove(&self, child: &Self);

    /// Own content of a text or raw node, `None` for every other node type.
    fn content(&self) -> Option<String>;

    fn set_text(&self, content: &str);

    fn attr(&self, name: &str) -> Option<String>;

    /// Attributes of an element node in insertion order.
    fn attrs(&self) -> Vec<(String, String)>;

    fn set_attr(&self, name: &str, value: &str);

    fn remove_attr(&self, name: &str);

    /// Concatenated text of this node and all of its descendants.
    fn text_content(&self) -> String {
        match self.ty() {
            NodeType::Text | NodeType::Raw => self.content().unwrap_or_default(),
            NodeType::Element | NodeType::Fragment => {
                self.children().iter().map(Self::text_content).collect()
            }
        }
    }

    fn clear(&self) {
        for child in self.children() {
            self.remove(&child);
        }
    }

    /// Depth-first, pre-order walk over every node below this one.
    fn descendants(&self) -> Vec<Self> {
        let mut out = vec![];
        let mut stack = self.children();
        stack.reverse();
        while let Some(node) = stack.pop() {
            if matches!(node.ty(), NodeType::Element | NodeType::Fragment) {
                let mut children = node.children();
                children.reverse();
                stack.extend(children);
            }
            out.push(node);
        }
        out
    }
}

/// A host document that views can be mounted into.
pub trait Document {
    type Node: Node;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn head(&self) -> Option<Self::Node>;
}

/// Compares two trees by node type, tag name, attributes, text and children, ignoring identity.
pub fn same_shape<N: Node>(a: &N, b: &N) -> bool {
    if a.ty() != b.ty() {
        return false;
    }

    match a.ty() {
        NodeType::Text | NodeType::Raw => a.content() == b.content(),
        NodeType::Element | NodeType::Fragment => {
            if a.name() != b.name() || a.attrs() != b.attrs() {
                return false;
            }

            let (left, right) = (a.children(), b.children());
            left.len() == right.len() && left.iter().zip(&right).all(|(l, r)| same_shape(l, r))
        }
    }
}

#[doc(hidden)]
pub fn append_text<N: Node>(parent: &N, content: &str) -> N {
    let text = N::text();
    text.set_text(content);
    parent.insert(&text, None);
    text
}
