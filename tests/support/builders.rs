// tests/support/builders.rs
use super::mocks::fixed_now;
use weebapi::domain::post::*;

/// Stored post fixture for seeding repositories directly.
pub struct PostBuilder {
    id: i64,
    title: String,
    slug: String,
    published: bool,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            id: 100,
            title: "Seeded Post".into(),
            slug: "seeded-post".into(),
            published: true,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            slug: PostSlug::new(self.slug).unwrap(),
            excerpt: PostExcerpt::default(),
            content: PostContent::new("Seeded body").unwrap(),
            author: PostAuthor::default(),
            category: Category::Autre,
            date: None,
            read_time: 0,
            is_published: self.published,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
