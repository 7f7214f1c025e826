//! `GET /user-likes` response body

use serde::{Deserialize, Serialize};
use starlike_core::MessageId;

/// Body of the user-likes response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserLikesModel {
    #[serde(rename = "userLikes")]
    pub user_likes: Vec<MessageId>,
}
