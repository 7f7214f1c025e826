//! Message list markup
//!
//! Produces the same shape the site renders server-side:
//!
//! ```text
//! <li class="list-group-item message-area" data-id="5">
//!   <p>text</p>
//!   <button class="btn btn-like"><i class="bi bi-star-fill"></i></button>
//! </li>
//! ```

use starlike_core::{IconState, LikeSelectors, MessageId, UserLikes};

use crate::document::{Document, Element};
use crate::error::DomError;

/// A message to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub id: MessageId,
    pub text: String,
}

impl MessageView {
    pub fn new(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Render one message container (detached) with its like control
///
/// The star starts filled when `likes` contains the message.
pub fn render_message(
    doc: &Document,
    message: &MessageView,
    likes: &UserLikes,
    selectors: &LikeSelectors,
) -> Result<Element, DomError> {
    let container = doc.create_element("li");
    container.add_class("list-group-item");
    container.add_class(&selectors.message_class);
    container.set_data(&selectors.id_key, message.id.as_str());

    let text = doc.create_element("p");
    text.set_text(message.text.as_str());
    container.append_child(&text)?;

    let button = doc.create_element("button");
    button.add_class("btn");
    button.add_class(&selectors.button_class);

    let state = IconState::from_membership(likes.contains(&message.id));
    let icon = doc.create_element("i");
    icon.add_class("bi");
    icon.add_class(selectors.icon_class(state));

    button.append_child(&icon)?;
    container.append_child(&button)?;
    Ok(container)
}

/// Render a `<ul>` of messages into the document body
pub fn render_message_list(
    doc: &Document,
    messages: &[MessageView],
    likes: &UserLikes,
    selectors: &LikeSelectors,
) -> Result<Element, DomError> {
    let list = doc.create_element("ul");
    list.add_class("list-group");
    for message in messages {
        list.append_child(&render_message(doc, message, likes, selectors)?)?;
    }
    doc.body().append_child(&list)?;

    tracing::debug!(count = messages.len(), "Rendered message list");

    Ok(list)
}

/// The star icon inside a message container's like control
pub fn like_icon(container: &Element, selectors: &LikeSelectors) -> Option<Element> {
    let button = container.find(&selectors.button_class)?;
    button
        .find(&selectors.filled_class)
        .or_else(|| button.find(&selectors.outline_class))
}
