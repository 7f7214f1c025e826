//! # starlike-dom
//!
//! In-memory document used to host the like controller outside a browser.
//!
//! A [`Document`] is a lock-protected arena of elements; [`Element`] handles
//! implement the `DomNode` port so the controller can resolve message ids and
//! flip icon classes on them. Clicks are delivered to subscribers over
//! unbounded channels, the way a delegated page-level listener would see them.

pub mod document;
pub mod error;
pub mod render;

pub use document::{Document, Element};
pub use error::DomError;
pub use render::{like_icon, render_message, render_message_list, MessageView};
