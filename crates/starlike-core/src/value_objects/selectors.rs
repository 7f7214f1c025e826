//! Like selectors - the DOM hooks the controller is wired to
//!
//! Passed to the controller at construction instead of being captured as
//! page-global handles.

use crate::entities::IconState;
use crate::traits::DomNode;

/// CSS classes and data key making up the page's like markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeSelectors {
    /// Class of the element wrapping a single message
    pub message_class: String,
    /// `data-*` key on the message container holding the message id
    pub id_key: String,
    /// Class of the clickable like control
    pub button_class: String,
    /// Icon class for a liked message
    pub filled_class: String,
    /// Icon class for an unliked message
    pub outline_class: String,
}

impl Default for LikeSelectors {
    fn default() -> Self {
        Self {
            message_class: "message-area".to_string(),
            id_key: "id".to_string(),
            button_class: "btn-like".to_string(),
            filled_class: "bi-star-fill".to_string(),
            outline_class: "bi-star".to_string(),
        }
    }
}

impl LikeSelectors {
    /// Icon class that represents the given state
    #[inline]
    pub fn icon_class(&self, state: IconState) -> &str {
        match state {
            IconState::Liked => &self.filled_class,
            IconState::Unliked => &self.outline_class,
        }
    }

    /// Read the icon state currently displayed by a node
    ///
    /// Returns `None` when the node carries neither icon class.
    pub fn icon_state_of(&self, node: &dyn DomNode) -> Option<IconState> {
        if node.has_class(&self.filled_class) {
            Some(IconState::Liked)
        } else if node.has_class(&self.outline_class) {
            Some(IconState::Unliked)
        } else {
            None
        }
    }
}
