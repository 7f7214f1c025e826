//! Integration test utilities for starlike
//!
//! This crate provides a stub of the site's like endpoints and helpers for
//! driving the HTTP backend and the like controller against it.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
