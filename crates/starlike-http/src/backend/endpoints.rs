//! URL construction for the like endpoints

use reqwest::Url;
use starlike_core::{DomainError, MessageId};

/// Endpoint URLs rooted at the configured base
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Root the endpoints at `base`, which may carry a path prefix
    pub fn new(mut base: Url) -> Result<Self, DomainError> {
        if base.cannot_be_a_base() {
            return Err(DomainError::Internal(format!("{base} cannot be a base URL")));
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base })
    }

    /// `GET /user-likes`
    pub fn user_likes(&self) -> Url {
        self.join(&["user-likes"])
    }

    /// `POST /messages/{id}/like`
    pub fn like(&self, message_id: &MessageId) -> Url {
        self.join(&["messages", message_id.as_str(), "like"])
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Never fails: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
