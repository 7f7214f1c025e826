//! Like markup rendering

mod messages;

pub use messages::{like_icon, render_message, render_message_list, MessageView};
