//! Likes backend over HTTP

mod endpoints;
mod error;
mod likes;

pub use endpoints::Endpoints;
pub use likes::HttpLikesBackend;
