//! Document errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("Element belongs to another document")]
    ForeignNode,

    #[error("Cannot append an element inside itself")]
    Cycle,
}
