//! Value objects - immutable types that represent domain concepts

mod message_id;
mod selectors;

pub use message_id::MessageId;
pub use selectors::LikeSelectors;
