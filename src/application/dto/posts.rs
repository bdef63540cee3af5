// src/application/dto/posts.rs
use crate::domain::post::{Category, Post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    /// Relative API location of this post.
    pub url: String,
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: Category,
    #[serde(default, with = "serde_time::option")]
    pub date: Option<DateTime<Utc>>,
    pub read_time: u32,
    pub is_published: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        let slug = post.slug.into_inner();
        Self {
            url: format!("/api/posts/{slug}/"),
            id: post.id.into(),
            title: post.title.into_inner(),
            slug,
            excerpt: post.excerpt.into_inner(),
            content: post.content.into_inner(),
            author: post.author.into_inner(),
            category: post.category,
            date: post.date,
            read_time: post.read_time,
            is_published: post.is_published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
