//! # starlike-controller
//!
//! Application layer wiring like clicks to the backend and the page.
//!
//! This crate provides:
//! - `ControllerContext`: the backend handle and DOM selectors a controller runs with
//! - `LikeController`: message id resolution, likes fetch, like submission, icon toggle
//! - A delegated click loop that handles every like click on its own task

pub mod services;

pub use services::{ClickOutcome, ControllerContext, LikeController, LikeResult};
