//! Test helpers for integration tests
//!
//! Provides a stub of the site's like endpoints running on a real socket,
//! plus ready-made backend configuration pointing at it.

use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use reqwest::Url;
use serde::Serialize;
use serde_json::json;
use starlike_common::BackendConfig;
use starlike_http::HttpLikesBackend;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

/// How the stub answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StubMode {
    #[default]
    Healthy,
    /// `GET /user-likes` answers 500
    FailUserLikes,
    /// `POST /messages/{id}/like` redirects to the login page
    Unauthorized,
    /// Every endpoint stalls before answering
    Slow(Duration),
}

#[derive(Default)]
struct StubInner {
    likes: Mutex<BTreeSet<i64>>,
    mode: Mutex<StubMode>,
    requests: Mutex<Vec<String>>,
    cookies: Mutex<Vec<String>>,
}

/// Shared state of the stub backend
#[derive(Clone, Default)]
pub struct StubState {
    inner: Arc<StubInner>,
}

impl StubState {
    pub fn set_likes(&self, ids: &[i64]) {
        *self.inner.likes.lock() = ids.iter().copied().collect();
    }

    pub fn likes(&self) -> Vec<i64> {
        self.inner.likes.lock().iter().copied().collect()
    }

    pub fn set_mode(&self, mode: StubMode) {
        *self.inner.mode.lock() = mode;
    }

    fn mode(&self) -> StubMode {
        *self.inner.mode.lock()
    }

    /// Requests seen so far, as `"METHOD /path"`
    pub fn requests(&self) -> Vec<String> {
        self.inner.requests.lock().clone()
    }

    /// `Cookie` header values seen so far
    pub fn cookies(&self) -> Vec<String> {
        self.inner.cookies.lock().clone()
    }

    fn record(&self, request: String, headers: &HeaderMap) {
        self.inner.requests.lock().push(request);
        if let Some(cookie) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
            self.inner.cookies.lock().push(cookie.to_string());
        }
    }

    async fn stall(&self) {
        if let StubMode::Slow(delay) = self.mode() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[derive(Serialize)]
struct UserLikesBody {
    #[serde(rename = "userLikes")]
    user_likes: Vec<i64>,
}

async fn user_likes(State(state): State<StubState>, headers: HeaderMap) -> Response {
    state.record("GET /user-likes".to_string(), &headers);
    state.stall().await;

    if state.mode() == StubMode::FailUserLikes {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    Json(UserLikesBody {
        user_likes: state.likes(),
    })
    .into_response()
}

async fn like_message(
    State(state): State<StubState>,
    Path(message_id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    state.record(format!("POST /messages/{message_id}/like"), &headers);
    state.stall().await;

    if state.mode() == StubMode::Unauthorized {
        return (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response();
    }

    // The site's like endpoint toggles
    let liked = {
        let mut likes = state.inner.likes.lock();
        if likes.remove(&message_id) {
            false
        } else {
            likes.insert(message_id);
            true
        }
    };

    Json(json!({ "liked": liked })).into_response()
}

/// Build the stub router
pub fn stub_app(state: StubState) -> Router {
    Router::new()
        .route("/user-likes", get(user_likes))
        .route("/messages/:message_id/like", post(like_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Stub backend instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: StubState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a stub whose user currently likes `liked`
    pub async fn start(liked: &[i64]) -> Result<Self> {
        let state = StubState::default();
        state.set_likes(liked);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let app = stub_app(state.clone());
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> Url {
        // An `http://ip:port` string always parses
        Url::parse(&format!("http://{}", self.addr)).expect("valid stub URL")
    }

    /// Backend settings pointing at this stub
    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig::new(self.base_url())
    }

    /// HTTP backend with default settings pointing at this stub
    pub fn backend(&self) -> Result<HttpLikesBackend> {
        Ok(HttpLikesBackend::from_config(&self.backend_config())?)
    }
}
