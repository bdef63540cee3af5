// src/domain/message/repository.rs
use crate::domain::cursor::ListCursor;
use crate::domain::errors::DomainResult;
use crate::domain::message::entity::{Message, MessageUpdate, NewMessage};
use crate::domain::message::value_objects::MessageId;
use async_trait::async_trait;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert(&self, message: NewMessage) -> DomainResult<Message>;
    async fn update(&self, update: MessageUpdate) -> DomainResult<Message>;
    async fn find_by_id(&self, id: MessageId) -> DomainResult<Option<Message>>;
    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Message>, Option<ListCursor>)>;
}
