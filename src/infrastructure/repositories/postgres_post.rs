// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::cursor::ListCursor;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostAuthor, PostContent, PostExcerpt, PostId, PostReadRepository, PostSlug,
    PostTitle, PostUpdate, PostWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str = "id, title, slug, excerpt, content, author, category, date, read_time, is_published, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    author: String,
    category: String,
    date: Option<DateTime<Utc>>,
    read_time: i32,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            excerpt: PostExcerpt::new(row.excerpt)?,
            content: PostContent::new(row.content)?,
            author: PostAuthor::new(Some(row.author))?,
            category: row.category.parse()?,
            date: row.date,
            read_time: u32::try_from(row.read_time)
                .map_err(|_| DomainError::Persistence("negative read_time stored".into()))?,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn read_time_column(read_time: u32) -> DomainResult<i32> {
    i32::try_from(read_time)
        .map_err(|_| DomainError::Validation("read_time is out of range".into()))
}

/// Escape `LIKE` metacharacters so the base is matched literally.
fn like_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            excerpt,
            content,
            author,
            category,
            date,
            read_time,
            is_published,
            created_at,
            updated_at,
        } = post;

        let sql = format!(
            "INSERT INTO posts (title, slug, excerpt, content, author, category, date, read_time, is_published, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(excerpt.as_str())
            .bind(content.as_str())
            .bind(author.as_str())
            .bind(category.as_str())
            .bind(date)
            .bind(read_time_column(read_time)?)
            .bind(is_published)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            excerpt,
            content,
            author,
            category,
            date,
            read_time,
            is_published,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(author) = author {
            builder.push(", author = ");
            builder.push_bind(author.into_inner());
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.as_str());
        }
        if let Some(date) = date {
            builder.push(", date = ");
            builder.push_bind(date);
        }
        if let Some(read_time) = read_time {
            builder.push(", read_time = ");
            builder.push_bind(read_time_column(read_time)?);
        }
        if let Some(is_published) = is_published {
            builder.push(", is_published = ");
            builder.push_bind(is_published);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let maybe_row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("post update conflict, please retry".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn slugs_with_prefix(&self, base: &str) -> DomainResult<Vec<String>> {
        let pattern = format!("{}-%", like_literal(base));
        sqlx::query_scalar::<_, String>(
            "SELECT slug FROM posts WHERE slug = $1 OR slug LIKE $2 ESCAPE '\\'",
        )
        .bind(base)
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        published_only: Option<bool>,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Post>, Option<ListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(POST_COLUMNS);
        builder.push(" FROM posts WHERE TRUE");
        if let Some(published) = published_only {
            builder.push(" AND is_published = ");
            builder.push_bind(published);
        }
        if let Some(cursor) = cursor {
            builder.push(" AND (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if posts.len() > limit as usize {
            posts.pop();
            if let Some(last) = posts.last() {
                next_cursor = Some(ListCursor::new(last.created_at, i64::from(last.id)));
            }
        }

        Ok((posts, next_cursor))
    }
}
