//! Domain entities

mod click;
mod icon;
mod user_likes;

pub use click::ClickEvent;
pub use icon::IconState;
pub use user_likes::UserLikes;
