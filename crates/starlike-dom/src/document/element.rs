//! Element - handle to one node of a document

use std::fmt;
use std::sync::Arc;

use starlike_core::{DomNode, NodeRef};

use super::html;
use super::tree::{Document, NodeId};
use crate::error::DomError;

/// Cheap, cloneable handle to an element
#[derive(Clone)]
pub struct Element {
    doc: Document,
    id: NodeId,
}

impl Element {
    pub(crate) fn new(doc: Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    /// The document this element lives in
    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn tag(&self) -> String {
        self.doc.tree().read().node(self.id).tag.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.doc.tree().read().node(self.id).classes.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.doc
            .tree()
            .read()
            .node(self.id)
            .classes
            .iter()
            .any(|c| c == class)
    }

    /// Add a class; no-op if already present
    pub fn add_class(&self, class: &str) {
        let mut tree = self.doc.tree().write();
        let classes = &mut tree.node_mut(self.id).classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    pub fn remove_class(&self, class: &str) {
        self.doc
            .tree()
            .write()
            .node_mut(self.id)
            .classes
            .retain(|c| c != class);
    }

    /// Value of `data-{key}`
    pub fn data(&self, key: &str) -> Option<String> {
        self.doc.tree().read().node(self.id).data.get(key).cloned()
    }

    /// Set `data-{key}`
    pub fn set_data(&self, key: &str, value: impl Into<String>) {
        self.doc
            .tree()
            .write()
            .node_mut(self.id)
            .data
            .insert(key.to_string(), value.into());
    }

    pub fn text(&self) -> Option<String> {
        self.doc.tree().read().node(self.id).text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.doc.tree().write().node_mut(self.id).text = Some(text.into());
    }

    pub fn parent(&self) -> Option<Element> {
        let parent = self.doc.tree().read().node(self.id).parent;
        parent.map(|id| Element::new(self.doc.clone(), id))
    }

    pub fn children(&self) -> Vec<Element> {
        let tree = self.doc.tree().read();
        tree.node(self.id)
            .children
            .iter()
            .map(|id| Element::new(self.doc.clone(), *id))
            .collect()
    }

    /// Append `child` as the last child, moving it out of any previous parent
    pub fn append_child(&self, child: &Element) -> Result<(), DomError> {
        if !self.doc.same_document(&child.doc) {
            return Err(DomError::ForeignNode);
        }

        let mut tree = self.doc.tree().write();
        if tree.is_inclusive_ancestor(child.id, self.id) {
            return Err(DomError::Cycle);
        }

        if let Some(old_parent) = tree.node(child.id).parent {
            tree.node_mut(old_parent).children.retain(|id| *id != child.id);
        }
        tree.node_mut(child.id).parent = Some(self.id);
        tree.node_mut(self.id).children.push(child.id);
        Ok(())
    }

    /// Nearest element, starting with this one, that carries `class`
    pub fn closest(&self, class: &str) -> Option<Element> {
        let tree = self.doc.tree().read();
        let mut current = Some(self.id);
        while let Some(id) = current {
            let node = tree.node(id);
            if node.classes.iter().any(|c| c == class) {
                return Some(Element::new(self.doc.clone(), id));
            }
            current = node.parent;
        }
        None
    }

    /// Descendants carrying `class`, in document order
    pub fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let tree = self.doc.tree().read();
        tree.descendants(self.id)
            .into_iter()
            .filter(|id| tree.node(*id).classes.iter().any(|c| c == class))
            .map(|id| Element::new(self.doc.clone(), id))
            .collect()
    }

    /// First descendant carrying `class`, in document order
    pub fn find(&self, class: &str) -> Option<Element> {
        let tree = self.doc.tree().read();
        tree.descendants(self.id)
            .into_iter()
            .find(|id| tree.node(*id).classes.iter().any(|c| c == class))
            .map(|id| Element::new(self.doc.clone(), id))
    }

    /// Serialize this element and its subtree
    pub fn outer_html(&self) -> String {
        let tree = self.doc.tree().read();
        html::serialize(&tree, self.id)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.doc.same_document(&other.doc)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag())
            .field("classes", &self.classes())
            .finish()
    }
}

impl DomNode for Element {
    fn closest(&self, class: &str) -> Option<NodeRef> {
        Element::closest(self, class).map(|el| Arc::new(el) as NodeRef)
    }

    fn find(&self, class: &str) -> Option<NodeRef> {
        Element::find(self, class).map(|el| Arc::new(el) as NodeRef)
    }

    fn data(&self, key: &str) -> Option<String> {
        Element::data(self, key)
    }

    fn has_class(&self, class: &str) -> bool {
        Element::has_class(self, class)
    }

    fn add_class(&self, class: &str) {
        Element::add_class(self, class);
    }

    fn remove_class(&self, class: &str) {
        Element::remove_class(self, class);
    }
}
