//! Wire models for the likes endpoints

mod user_likes;

pub use user_likes::UserLikesModel;
