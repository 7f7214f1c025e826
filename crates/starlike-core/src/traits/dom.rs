//! DOM port - the slice of the document API the like controller touches

use std::sync::Arc;

/// Shared handle to a node
pub type NodeRef = Arc<dyn DomNode>;

pub trait DomNode: Send + Sync {
    /// Nearest node, starting at this one and walking up, carrying `class`
    fn closest(&self, class: &str) -> Option<NodeRef>;

    /// First descendant, in document order, carrying `class`
    fn find(&self, class: &str) -> Option<NodeRef>;

    /// Value of the `data-{key}` attribute
    fn data(&self, key: &str) -> Option<String>;

    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);
}
