// src/domain/post/services/mod.rs
pub mod slug;

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostSlug, PostTitle};

/// Domain service producing unique slugs for posts against current storage.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Snapshot the slugs sharing the title's base and pick the first free
    /// candidate. Callers retry on
    /// [`SlugConflict`](crate::domain::errors::DomainError::SlugConflict)
    /// since another writer may claim the slug before it is stored.
    pub async fn generate_unique_slug(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let base = slug::normalize_base(title.as_str(), self.generator.as_ref())?;
        let taken: HashSet<String> = self
            .read_repo
            .slugs_with_prefix(&base)
            .await?
            .into_iter()
            .collect();

        let assigned = slug::probe_candidates(&base, |candidate| taken.contains(candidate))?;
        tracing::debug!(base = %base, taken = taken.len(), slug = %assigned, "slug assigned");
        Ok(assigned)
    }
}
