use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    thread_local,
};

use masthead_nodes::{Document, Node, NodeType};
use wasm_bindgen::{intern, prelude::*};

thread_local! {
    static DOCUMENT: Option<web_sys::Document> = if cfg!(target_family = "wasm") {
        web_sys::window().and_then(|window| window.document())
    } else {
        None
    };
}

fn native_document() -> web_sys::Document {
    DOCUMENT
        .with(Clone::clone)
        .expect("dom nodes only work in browser environments")
}

/// The browser document, if there is one.
#[derive(Clone, Debug)]
pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn current() -> Option<Self> {
        DOCUMENT.with(Clone::clone).map(Self)
    }

    pub fn native(&self) -> &web_sys::Document {
        &self.0
    }
}

impl Document for WebDocument {
    type Node = DomNode;

    fn element_by_id(&self, id: &str) -> Option<DomNode> {
        let native = self.0.get_element_by_id(id)?;
        DomNode::adopt(web_sys::Node::from(native))
    }

    fn head(&self) -> Option<DomNode> {
        let native = self.0.head()?;
        DomNode::adopt(web_sys::Node::from(native))
    }
}

#[derive(Clone, Debug)]
pub struct DomNode(Rc<Inner>);

type WeakNode = Weak<Inner>;

#[derive(Debug)]
struct Inner {
    native: web_sys::Node,
    ty: NodeType,

    parent: RefCell<Option<WeakNode>>,
    children: RefCell<Vec<DomNode>>,
    source: RefCell<String>,
}

impl DomNode {
    fn new(native: web_sys::Node, ty: NodeType) -> Self {
        Self(Rc::new(Inner {
            native,
            ty,
            parent: RefCell::default(),
            children: RefCell::default(),
            source: RefCell::default(),
        }))
    }

    pub fn native(&self) -> &web_sys::Node {
        &self.0.native
    }

    fn is_virtual(&self) -> bool {
        self.ty().is_virtual()
    }

    fn from_native(native: web_sys::Node) -> Option<Self> {
        let ty = if native.has_type::<web_sys::Element>() {
            NodeType::Element
        } else if native.has_type::<web_sys::Text>() {
            NodeType::Text
        } else if native.has_type::<web_sys::Comment>() {
            NodeType::Fragment
        } else {
            return None;
        };

        Some(Self::new(native, ty))
    }

    /// Wraps a node that already lives in the document, along with its existing children.
    pub fn adopt(native: web_sys::Node) -> Option<Self> {
        let node = Self::from_native(native)?;

        if node.ty() == NodeType::Element {
            let natives = node.0.native.child_nodes();
            let adopted = (0..natives.length())
                .filter_map(|i| natives.get(i))
                .filter_map(Self::adopt)
                .collect::<Vec<_>>();

            for child in &adopted {
                child.0.parent.borrow_mut().replace(Rc::downgrade(&node.0));
            }
            *node.0.children.borrow_mut() = adopted;
        }

        Some(node)
    }

    fn native_parent(&self) -> Option<web_sys::Node> {
        self.0.native.parent_node()
    }

    fn native_target(&self) -> Option<web_sys::Node> {
        if self.is_virtual() {
            self.native_parent()
        } else {
            Some(self.0.native.clone())
        }
    }

    fn first_node(&self) -> web_sys::Node {
        if self.is_virtual() {
            let children = self.0.children.borrow();
            if let Some(first) = children.first() {
                return first.0.native.clone();
            }
        }

        self.0.native.clone()
    }

    fn element_ref(&self) -> &web_sys::Element {
        if self.ty() != NodeType::Element {
            panic!("attributes only exist on element nodes");
        }
        self.0.native.unchecked_ref::<web_sys::Element>()
    }

    pub fn mount_to_native(&self, target: &web_sys::Node, before: Option<&web_sys::Node>) {
        if self.is_virtual() {
            let children = self.0.children.borrow();
            for child in &*children {
                child.mount_to_native(target, before);
            }
        }

        target.insert_before(&self.0.native, before).unwrap();
    }

    pub fn remove_from_native(&self, target: &web_sys::Node) {
        if self.is_virtual() {
            let children = self.0.children.borrow();
            for child in &*children {
                child.remove_from_native(target);
            }
        }

        target.remove_child(&self.0.native).unwrap();
    }
}

impl Node for DomNode {
    fn element(namespace: Option<&str>, name: &str) -> Self {
        let document = native_document();
        let native = if namespace.is_some() {
            document.create_element_ns(namespace, name)
        } else {
            document.create_element(name)
        }
        .unwrap();

        Self::new(native.unchecked_into(), NodeType::Element)
    }

    fn text() -> Self {
        let native = web_sys::Text::new().unwrap();

        Self::new(native.unchecked_into(), NodeType::Text)
    }

    fn fragment() -> Self {
        let native = web_sys::Comment::new().unwrap();

        Self::new(native.unchecked_into(), NodeType::Fragment)
    }

    fn raw() -> Self {
        let native = web_sys::Comment::new().unwrap();

        Self::new(native.unchecked_into(), NodeType::Raw)
    }

    fn ty(&self) -> NodeType {
        self.0.ty
    }

    fn name(&self) -> Option<String> {
        if self.ty() == NodeType::Element {
            Some(self.0.native.unchecked_ref::<web_sys::Element>().local_name())
        } else {
            None
        }
    }

    fn parent(&self) -> Option<Self> {
        self.0
            .parent
            .borrow()
            .as_ref()
            .and_then(Weak::upgrade)
            .map(DomNode)
    }

    fn children(&self) -> Vec<Self> {
        self.0.children.borrow().clone()
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        let children = parent.0.children.borrow();
        children
            .iter()
            .position(|node| node == self)
            .and_then(|idx| children.get(idx + 1).cloned())
    }

    fn insert(&self, child: &Self, before: Option<&Self>) {
        if let Some(old) = child.parent() {
            old.remove(child);
        }

        let mut children = self.0.children.borrow_mut();
        let idx = if let Some(before) = before {
            children
                .iter()
                .position(|node| node == before)
                .expect("not a parent of insertion point node")
        } else {
            children.len()
        };
        children.insert(idx, child.clone());

        child.0.parent.borrow_mut().replace(Rc::downgrade(&self.0));

        if let Some(target) = self.native_target() {
            let before = before.map(|node| node.first_node()).or_else(|| {
                if self.is_virtual() {
                    self.native().next_sibling()
                } else {
                    None
                }
            });

            child.mount_to_native(&target, before.as_ref());
        }
    }

    fn remove(&self, child: &Self) {
        let mut children = self.0.children.borrow_mut();
        let idx = children
            .iter()
            .position(|node| node == child)
            .expect("not a parent of child node");
        children.remove(idx);

        child.0.parent.borrow_mut().take();

        if let Some(target) = self.native_target() {
            child.remove_from_native(&target);
        }
    }

    fn content(&self) -> Option<String> {
        match self.ty() {
            NodeType::Text => Some(self.0.native.text_content().unwrap_or_default()),
            NodeType::Raw => Some(self.0.source.borrow().clone()),
            _ => None,
        }
    }

    fn set_text(&self, content: &str) {
        match self.ty() {
            NodeType::Text => {
                self.0.native.set_text_content(Some(content));
            }
            NodeType::Raw => {
                self.clear();

                let range = web_sys::Range::new().unwrap();
                let doc = range.create_contextual_fragment(content).unwrap();
                let native_nodes = doc.child_nodes();

                // Collect first: inserting moves nodes out of the live list.
                let natives = (0..native_nodes.length())
                    .filter_map(|i| native_nodes.get(i))
                    .collect::<Vec<_>>();
                for native in natives {
                    if let Some(node) = Self::adopt(native) {
                        self.insert(&node, None);
                    }
                }

                *self.0.source.borrow_mut() = content.to_string();
            }
            _ => panic!("can only set text content of text or raw nodes"),
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.element_ref().get_attribute(name)
    }

    fn attrs(&self) -> Vec<(String, String)> {
        if self.ty() != NodeType::Element {
            return vec![];
        }

        let element = self.element_ref();
        element
            .get_attribute_names()
            .iter()
            .filter_map(|name| name.as_string())
            .filter_map(|name| {
                let value = element.get_attribute(&name)?;
                Some((name, value))
            })
            .collect()
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.element_ref()
            .set_attribute(intern(name), value)
            .unwrap();
    }

    fn remove_attr(&self, name: &str) {
        self.element_ref().remove_attribute(intern(name)).unwrap();
    }
}

impl PartialEq for DomNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for DomNode {}
