//! # starlike-core
//!
//! Domain layer containing the like-toggle value objects, entities, and the
//! ports (backend and DOM) the controller drives.
//! This crate has zero dependencies on infrastructure (HTTP client, DOM backend, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ClickEvent, IconState, UserLikes};
pub use error::DomainError;
pub use traits::{BackendResult, DomNode, LikesBackend, NodeRef};
pub use value_objects::{LikeSelectors, MessageId};
