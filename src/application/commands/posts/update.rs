// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        derivation::{POST_SLUG, WriteKind, WritePhase},
        post::{
            Category, PostAuthor, PostContent, PostExcerpt, PostSlug, PostTitle, PostUpdate,
        },
    },
};
use chrono::{DateTime, Utc};

/// Partial update of a post addressed by its slug. The slug itself cannot be
/// changed through an update.
#[derive(Default)]
pub struct UpdatePostCommand {
    pub slug: String,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<Category>,
    pub date: Option<Option<DateTime<Utc>>>,
    pub read_time: Option<u32>,
    pub is_published: Option<bool>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(command.slug)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let mut update = PostUpdate::new(post.id, post.updated_at);
        if let Some(title) = command.title {
            update = update.with_title(PostTitle::new(title)?);
        }
        if let Some(excerpt) = command.excerpt {
            update = update.with_excerpt(PostExcerpt::new(excerpt)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(PostContent::new(content)?);
        }
        if let Some(author) = command.author {
            update = update.with_author(PostAuthor::new(Some(author))?);
        }
        if let Some(category) = command.category {
            update = update.with_category(category);
        }
        if let Some(date) = command.date {
            update = update.with_date(date);
        }
        if let Some(read_time) = command.read_time {
            update = update.with_read_time(read_time);
        }
        if let Some(is_published) = command.is_published {
            update = update.with_published(is_published);
        }
        update.set_updated_at(self.clock.now());

        let title_changed = update
            .title
            .as_ref()
            .is_some_and(|title| title != &post.title);
        tracing::debug!(
            phase = %WritePhase::Pending,
            kind = %WriteKind::Update,
            slug = %post.slug,
            title_changed,
            rederive_slug = POST_SLUG.applies(WriteKind::Update),
            "updating post"
        );

        let updated = self.write_repo.update(update).await?;
        tracing::info!(phase = %WritePhase::Persisted, slug = %updated.slug, "post updated");
        Ok(updated.into())
    }
}
