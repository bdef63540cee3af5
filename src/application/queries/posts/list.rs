// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::application::{
    dto::{CursorPage, PostDto},
    error::ApplicationResult,
    queries::paging::{decode_cursor, normalize_limit},
};

pub struct ListPostsQuery {
    /// `Some(true)` for published posts only, `Some(false)` for drafts only.
    pub published: Option<bool>,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl PostQueryService {
    pub async fn list_posts(
        &self,
        query: ListPostsQuery,
    ) -> ApplicationResult<CursorPage<PostDto>> {
        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let (records, next_cursor) = self
            .read_repo
            .list_page(query.published, limit, cursor)
            .await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}
