// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        derivation::{POST_SLUG, WriteKind, WritePhase},
        errors::DomainError,
        post::{
            Category, NewPost, Post, PostAuthor, PostContent, PostExcerpt, PostSlug, PostTitle,
        },
    },
};
use chrono::{DateTime, Utc};

pub struct CreatePostCommand {
    pub title: String,
    /// Explicit slug; blank or absent means derive it from the title.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: Option<String>,
    pub category: Option<Category>,
    pub date: Option<DateTime<Utc>>,
    pub read_time: Option<u32>,
    pub is_published: Option<bool>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    author: Option<String>,
    category: Option<Category>,
    is_published: Option<bool>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content.ok_or("content is required")?,
            author: self.author,
            category: self.category,
            date: None,
            read_time: None,
            is_published: self.is_published,
        })
    }
}

/// Validated post columns minus the slug, reused across slug attempts.
#[derive(Clone)]
struct PostFields {
    title: PostTitle,
    excerpt: PostExcerpt,
    content: PostContent,
    author: PostAuthor,
    category: Category,
    date: Option<DateTime<Utc>>,
    read_time: u32,
    is_published: bool,
    now: DateTime<Utc>,
}

impl PostFields {
    fn into_new_post(self, slug: PostSlug) -> NewPost {
        NewPost {
            title: self.title,
            slug,
            excerpt: self.excerpt,
            content: self.content,
            author: self.author,
            category: self.category,
            date: self.date,
            read_time: self.read_time,
            is_published: self.is_published,
            created_at: self.now,
            updated_at: self.now,
        }
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let fields = PostFields {
            title: PostTitle::new(command.title)?,
            excerpt: PostExcerpt::new(command.excerpt.unwrap_or_default())?,
            content: PostContent::new(command.content)?,
            author: PostAuthor::new(command.author)?,
            category: command.category.unwrap_or(Category::Autre),
            date: command.date,
            read_time: command.read_time.unwrap_or(0),
            is_published: command.is_published.unwrap_or(true),
            now: self.clock.now(),
        };

        let requested = command
            .slug
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PostSlug::new)
            .transpose()?;

        tracing::debug!(
            phase = %WritePhase::Pending,
            kind = %WriteKind::Create,
            title = %fields.title,
            derive_slug = POST_SLUG.applies(WriteKind::Create) && requested.is_none(),
            "creating post"
        );

        let created = match requested {
            Some(slug) => self.insert_with_requested_slug(fields, slug).await?,
            None => self.insert_with_derived_slug(fields).await?,
        };

        tracing::info!(
            phase = %WritePhase::Persisted,
            id = i64::from(created.id),
            slug = %created.slug,
            "post created"
        );
        Ok(created.into())
    }

    async fn insert_with_requested_slug(
        &self,
        fields: PostFields,
        slug: PostSlug,
    ) -> ApplicationResult<Post> {
        match self.write_repo.insert(fields.into_new_post(slug)).await {
            Ok(post) => Ok(post),
            Err(DomainError::SlugConflict(_)) => {
                Err(ApplicationError::conflict("slug already exists"))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Check-then-insert with the storage unique constraint as the arbiter:
    /// a slug claimed between the probe and the insert is re-probed.
    async fn insert_with_derived_slug(&self, fields: PostFields) -> ApplicationResult<Post> {
        let mut attempt = 1;
        loop {
            let slug = self.slug_service.generate_unique_slug(&fields.title).await?;
            match self.write_repo.insert(fields.clone().into_new_post(slug.clone())).await {
                Ok(post) => return Ok(post),
                Err(DomainError::SlugConflict(reason)) if attempt < self.slug_max_attempts => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.slug_max_attempts,
                        slug = %slug,
                        reason = %reason,
                        "slug claimed concurrently, re-probing"
                    );
                    attempt += 1;
                }
                Err(DomainError::SlugConflict(reason)) => {
                    tracing::error!(attempt, slug = %slug, "slug assignment retries exhausted");
                    return Err(ApplicationError::conflict(format!(
                        "could not assign a unique slug after {attempt} attempts: {reason}"
                    )));
                }
                Err(other) => return Err(other.into()),
            }
        }
    }
}
