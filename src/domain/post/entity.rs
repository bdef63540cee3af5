// src/domain/post/entity.rs
use crate::domain::post::value_objects::{
    Category, PostAuthor, PostContent, PostExcerpt, PostId, PostSlug, PostTitle,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub excerpt: PostExcerpt,
    pub content: PostContent,
    pub author: PostAuthor,
    pub category: Category,
    pub date: Option<DateTime<Utc>>,
    pub read_time: u32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Apply a partial update. The slug is not part of [`PostUpdate`]; it keeps
    /// the value assigned at creation.
    pub fn apply(&mut self, update: &PostUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(excerpt) = &update.excerpt {
            self.excerpt = excerpt.clone();
        }
        if let Some(content) = &update.content {
            self.content = content.clone();
        }
        if let Some(author) = &update.author {
            self.author = author.clone();
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(read_time) = update.read_time {
            self.read_time = read_time;
        }
        if let Some(is_published) = update.is_published {
            self.is_published = is_published;
        }
        self.updated_at = update.updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub excerpt: PostExcerpt,
    pub content: PostContent,
    pub author: PostAuthor,
    pub category: Category,
    pub date: Option<DateTime<Utc>>,
    pub read_time: u32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub excerpt: Option<PostExcerpt>,
    pub content: Option<PostContent>,
    pub author: Option<PostAuthor>,
    pub category: Option<Category>,
    pub date: Option<Option<DateTime<Utc>>>,
    pub read_time: Option<u32>,
    pub is_published: Option<bool>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            excerpt: None,
            content: None,
            author: None,
            category: None,
            date: None,
            read_time: None,
            is_published: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_excerpt(mut self, excerpt: PostExcerpt) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_author(mut self, author: PostAuthor) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_read_time(mut self, read_time: u32) -> Self {
        self.read_time = Some(read_time);
        self
    }

    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}
