//! Error handling utilities for HTTP calls

use reqwest::{Error as ReqwestError, Response};
use starlike_core::DomainError;

/// Convert a reqwest error to DomainError
pub fn map_request_error(e: ReqwestError) -> DomainError {
    if e.is_timeout() {
        DomainError::Timeout
    } else if e.is_decode() {
        DomainError::Decode(e.to_string())
    } else {
        DomainError::Network(e.to_string())
    }
}

/// Reject anything outside 2xx, including redirects
pub fn ensure_success(response: Response) -> Result<Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(DomainError::UnexpectedStatus {
            status: status.as_u16(),
            path: response.url().path().to_string(),
        })
    }
}
