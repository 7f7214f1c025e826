//! # starlike-http
//!
//! HTTP layer implementing the `LikesBackend` port with reqwest.
//!
//! ## Overview
//!
//! This crate talks to the two like endpoints of the site backend:
//!
//! - `GET /user-likes` for the session user's liked message ids
//! - `POST /messages/{id}/like` to record a like
//!
//! It handles client construction (timeouts, session cookie, redirect policy),
//! the wire models, wire <-> domain mappers, and the backend implementation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use starlike_common::AppConfig;
//! use starlike_core::LikesBackend;
//! use starlike_http::HttpLikesBackend;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let backend = HttpLikesBackend::from_config(&config.backend)?;
//!     let likes = backend.fetch_user_likes().await?;
//!     println!("{} liked messages", likes.len());
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod client;
pub mod mappers;
pub mod models;

// Re-export commonly used types
pub use backend::{Endpoints, HttpLikesBackend};
pub use client::build_client;
pub use models::UserLikesModel;
