//! Controller context - dependency container for the like controller

use std::sync::Arc;

use starlike_core::{LikeSelectors, LikesBackend};

/// Everything a controller needs, handed over at construction
#[derive(Clone)]
pub struct ControllerContext {
    backend: Arc<dyn LikesBackend>,
    selectors: LikeSelectors,
}

impl ControllerContext {
    pub fn new(backend: Arc<dyn LikesBackend>, selectors: LikeSelectors) -> Self {
        Self { backend, selectors }
    }

    #[inline]
    pub fn backend(&self) -> &Arc<dyn LikesBackend> {
        &self.backend
    }

    #[inline]
    pub fn selectors(&self) -> &LikeSelectors {
        &self.selectors
    }
}
