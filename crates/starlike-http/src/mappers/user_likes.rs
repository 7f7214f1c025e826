//! UserLikes entity <-> model mapper

use starlike_core::UserLikes;

use crate::models::UserLikesModel;

/// Convert UserLikesModel to UserLikes entity
impl From<UserLikesModel> for UserLikes {
    fn from(model: UserLikesModel) -> Self {
        model.user_likes.into_iter().collect()
    }
}

/// Convert UserLikes entity to the wire form (ids sorted for stable output)
impl From<&UserLikes> for UserLikesModel {
    fn from(likes: &UserLikes) -> Self {
        let mut user_likes: Vec<_> = likes.iter().cloned().collect();
        user_likes.sort();
        UserLikesModel { user_likes }
    }
}
