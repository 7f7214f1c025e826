//! Controller services

mod context;
mod like;

pub use context::ControllerContext;
pub use like::{ClickOutcome, LikeController, LikeResult};
