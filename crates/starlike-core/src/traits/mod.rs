//! Ports - interfaces the domain needs from the outside world

mod backend;
mod dom;

pub use backend::{BackendResult, LikesBackend};
pub use dom::{DomNode, NodeRef};
