// src/application/queries/messages/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{CursorPage, MessageDto},
        error::{ApplicationError, ApplicationResult},
        queries::paging::{decode_cursor, normalize_limit},
    },
    domain::message::{MessageId, MessageRepository},
};

pub struct GetMessageQuery {
    pub id: i64,
}

pub struct ListMessagesQuery {
    pub limit: u32,
    pub cursor: Option<String>,
}

pub struct MessageQueryService {
    repo: Arc<dyn MessageRepository>,
}

impl MessageQueryService {
    pub fn new(repo: Arc<dyn MessageRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_message(&self, query: GetMessageQuery) -> ApplicationResult<MessageDto> {
        let id = MessageId::new(query.id)
            .map_err(|_| ApplicationError::not_found("message not found"))?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("message not found"))
    }

    pub async fn list_messages(
        &self,
        query: ListMessagesQuery,
    ) -> ApplicationResult<CursorPage<MessageDto>> {
        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;
        let (records, next_cursor) = self.repo.list_page(limit, cursor).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}
