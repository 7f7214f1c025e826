//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Target Resolution Errors
    // =========================================================================
    #[error("Click target has no message container")]
    MissingTarget,

    #[error("Invalid message id: {0:?}")]
    InvalidMessageId(String),

    // =========================================================================
    // Backend Errors
    // =========================================================================
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected status {status} from {path}")]
    UnexpectedStatus { status: u16, path: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    // =========================================================================
    // Internal Errors
    // =========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingTarget => "MISSING_TARGET",
            Self::InvalidMessageId(_) => "INVALID_MESSAGE_ID",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this error came out of a failed HTTP exchange
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout | Self::UnexpectedStatus { .. } | Self::Decode(_)
        )
    }

    /// Check if the click could not be tied to a message
    pub fn is_missing_target(&self) -> bool {
        matches!(self, Self::MissingTarget | Self::InvalidMessageId(_))
    }
}
