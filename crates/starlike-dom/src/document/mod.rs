//! In-memory document tree

mod element;
mod html;
mod tree;

pub use element::Element;
pub use tree::Document;
