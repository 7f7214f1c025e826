//! Document - shared element arena plus click subscribers

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use starlike_core::ClickEvent;
use tokio::sync::mpsc;

use super::element::Element;

/// Index of a node inside its document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

#[derive(Debug, Default)]
pub(crate) struct NodeData {
    pub(crate) tag: String,
    pub(crate) classes: Vec<String>,
    pub(crate) data: BTreeMap<String, String>,
    pub(crate) text: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

#[derive(Debug)]
pub(crate) struct Tree {
    nodes: Vec<NodeData>,
}

impl Tree {
    pub(crate) fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    fn push(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        });
        id
    }

    /// Is `ancestor` equal to `node` or one of its ancestors
    pub(crate) fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    /// Depth-first, document-order walk below (and excluding) `root`
    pub(crate) fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(root).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }
}

struct DocumentInner {
    tree: RwLock<Tree>,
    click_subscribers: Mutex<Vec<mpsc::UnboundedSender<Arc<ClickEvent>>>>,
}

/// An in-memory page
///
/// Cloning yields another handle to the same document.
#[derive(Clone)]
pub struct Document {
    inner: Arc<DocumentInner>,
}

impl Document {
    /// Create an empty document holding only a `<body>`
    pub fn new() -> Self {
        let mut tree = Tree { nodes: Vec::new() };
        tree.push("body");
        Self {
            inner: Arc::new(DocumentInner {
                tree: RwLock::new(tree),
                click_subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// The root `<body>` element
    pub fn body(&self) -> Element {
        Element::new(self.clone(), NodeId(0))
    }

    /// Create a detached element
    pub fn create_element(&self, tag: &str) -> Element {
        let id = self.inner.tree.write().push(tag);
        Element::new(self.clone(), id)
    }

    /// All elements carrying `class`, in document order
    pub fn elements_by_class(&self, class: &str) -> Vec<Element> {
        self.body().elements_by_class(class)
    }

    /// Serialize the whole body
    pub fn outer_html(&self) -> String {
        self.body().outer_html()
    }

    /// Register a page-level click listener
    ///
    /// Every subsequent [`Document::click`] is delivered to the returned
    /// receiver until it is dropped.
    pub fn subscribe_clicks(&self) -> mpsc::UnboundedReceiver<Arc<ClickEvent>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.click_subscribers.lock().push(tx);
        rx
    }

    /// Drop every click listener, closing their streams
    pub fn close_clicks(&self) {
        self.inner.click_subscribers.lock().clear();
    }

    /// Click on `target`, delivering the event to all live listeners
    pub fn click(&self, target: &Element) -> Arc<ClickEvent> {
        let event = Arc::new(ClickEvent::new(Arc::new(target.clone())));
        let mut subscribers = self.inner.click_subscribers.lock();
        subscribers.retain(|tx| tx.send(Arc::clone(&event)).is_ok());

        tracing::trace!(
            tag = %target.tag(),
            listeners = subscribers.len(),
            "Click dispatched"
        );

        event
    }

    pub(crate) fn tree(&self) -> &RwLock<Tree> {
        &self.inner.tree
    }

    pub(crate) fn same_document(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.inner.tree.read().nodes.len())
            .finish()
    }
}
