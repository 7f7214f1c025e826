//! HTTP implementation of LikesBackend

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use starlike_common::BackendConfig;
use starlike_core::traits::{BackendResult, LikesBackend};
use starlike_core::{MessageId, UserLikes};

use crate::client::build_client;
use crate::models::UserLikesModel;

use super::endpoints::Endpoints;
use super::error::{ensure_success, map_request_error};

/// reqwest implementation of LikesBackend
#[derive(Clone)]
pub struct HttpLikesBackend {
    client: Client,
    endpoints: Endpoints,
}

impl HttpLikesBackend {
    /// Create a backend from an existing client and endpoint set
    pub fn new(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// Create a backend with a client built from configuration
    pub fn from_config(config: &BackendConfig) -> BackendResult<Self> {
        let client = build_client(config)?;
        let endpoints = Endpoints::new(config.base_url.clone())?;
        Ok(Self::new(client, endpoints))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[async_trait]
impl LikesBackend for HttpLikesBackend {
    #[instrument(skip(self))]
    async fn fetch_user_likes(&self) -> BackendResult<UserLikes> {
        let response = self
            .client
            .get(self.endpoints.user_likes())
            .send()
            .await
            .map_err(map_request_error)?;

        let model: UserLikesModel = ensure_success(response)?
            .json()
            .await
            .map_err(map_request_error)?;

        debug!(count = model.user_likes.len(), "Fetched user likes");

        Ok(UserLikes::from(model))
    }

    #[instrument(skip_all, fields(message_id = %message_id))]
    async fn submit_like(&self, message_id: &MessageId) -> BackendResult<()> {
        let response = self
            .client
            .post(self.endpoints.like(message_id))
            .send()
            .await
            .map_err(map_request_error)?;

        ensure_success(response)?;

        debug!("Like submitted");

        Ok(())
    }
}
