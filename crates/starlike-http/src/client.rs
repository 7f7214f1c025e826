//! reqwest client construction

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{redirect, Client};
use starlike_common::BackendConfig;
use starlike_core::DomainError;

/// Build the HTTP client used for every like request
///
/// Redirects are not followed: the site answers an unauthenticated like with
/// a redirect to its login page, which must surface as a failure.
pub fn build_client(config: &BackendConfig) -> Result<Client, DomainError> {
    let mut headers = HeaderMap::new();
    if let Some(cookie) = &config.session_cookie {
        let value = HeaderValue::from_str(cookie)
            .map_err(|_| DomainError::Internal("session cookie is not a valid header value".to_string()))?;
        headers.insert(COOKIE, value);
    }

    Client::builder()
        .timeout(config.request_timeout())
        .connect_timeout(config.connect_timeout())
        .redirect(redirect::Policy::none())
        .default_headers(headers)
        .build()
        .map_err(|e| DomainError::Internal(format!("failed to build HTTP client: {e}")))
}
