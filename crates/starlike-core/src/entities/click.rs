//! Click event - a user click delivered to the controller

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::traits::NodeRef;

/// A click on some node of the page
pub struct ClickEvent {
    target: NodeRef,
    default_prevented: AtomicBool,
}

impl ClickEvent {
    /// Create a click targeting the given node
    pub fn new(target: NodeRef) -> Self {
        Self {
            target,
            default_prevented: AtomicBool::new(false),
        }
    }

    /// The node the click landed on
    #[inline]
    pub fn target(&self) -> &NodeRef {
        &self.target
    }

    /// Suppress the browser's default link/button action
    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::Release);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::Acquire)
    }
}

impl fmt::Debug for ClickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickEvent")
            .field("default_prevented", &self.is_default_prevented())
            .finish()
    }
}
