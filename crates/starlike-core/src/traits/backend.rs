//! Likes backend port
//!
//! The domain layer defines what it needs from the server, and the
//! infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::UserLikes;
use crate::error::DomainError;
use crate::value_objects::MessageId;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait LikesBackend: Send + Sync {
    /// Fetch the current session user's liked message ids
    async fn fetch_user_likes(&self) -> BackendResult<UserLikes>;

    /// Record that the current session user likes a message
    async fn submit_like(&self, message_id: &MessageId) -> BackendResult<()>;
}
