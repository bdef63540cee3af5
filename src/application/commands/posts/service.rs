// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
};

pub const DEFAULT_SLUG_MAX_ATTEMPTS: u32 = 5;

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) slug_max_attempts: u32,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        slug_service: Arc<PostSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            slug_max_attempts: DEFAULT_SLUG_MAX_ATTEMPTS,
        }
    }

    /// Number of slug assignments tried before a create fails with a conflict.
    pub fn with_slug_max_attempts(mut self, attempts: u32) -> Self {
        self.slug_max_attempts = attempts.max(1);
        self
    }
}
