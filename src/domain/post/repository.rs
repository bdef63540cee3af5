// src/domain/post/repository.rs
use crate::domain::cursor::ListCursor;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostSlug};
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Insert a new post. A unique violation on the slug must surface as
    /// [`DomainError::SlugConflict`](crate::domain::errors::DomainError::SlugConflict).
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;

    /// Every stored slug equal to `base` or starting with `base-`.
    async fn slugs_with_prefix(&self, base: &str) -> DomainResult<Vec<String>>;

    async fn list_page(
        &self,
        published_only: Option<bool>,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Post>, Option<ListCursor>)>;
}
