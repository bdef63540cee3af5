// src/infrastructure/repositories/postgres_message.rs
use super::map_sqlx;
use crate::domain::cursor::ListCursor;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::message::{
    EmailAddress, Message, MessageId, MessageRepository, MessageText, MessageUpdate, NewMessage,
    PersonName, PhoneNumber,
};
use crate::domain::sentiment::Sentiment;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const MESSAGE_COLUMNS: &str = "id, first_name, last_name, phone_number, email_address, message, sentiment_label, sentiment_binary, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MessageRow {
    id: i64,
    first_name: String,
    last_name: String,
    phone_number: String,
    email_address: String,
    message: String,
    sentiment_label: Option<String>,
    sentiment_binary: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for Message {
    type Error = DomainError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MessageId::new(row.id)?,
            first_name: PersonName::new("first_name", row.first_name)?,
            last_name: PersonName::new("last_name", row.last_name)?,
            phone_number: PhoneNumber::new(row.phone_number)?,
            email_address: EmailAddress::new(row.email_address)?,
            text: MessageText::new(row.message),
            sentiment: Sentiment::from_stored(
                row.sentiment_label.as_deref(),
                row.sentiment_binary,
            )?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn label_column(sentiment: Sentiment) -> Option<&'static str> {
    sentiment.label.map(|label| label.as_str())
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn insert(&self, message: NewMessage) -> DomainResult<Message> {
        let sql = format!(
            "INSERT INTO messages (first_name, last_name, phone_number, email_address, message, sentiment_label, sentiment_binary, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {MESSAGE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, MessageRow>(&sql)
            .bind(message.first_name.as_str())
            .bind(message.last_name.as_str())
            .bind(message.phone_number.as_str())
            .bind(message.email_address.as_str())
            .bind(message.text.as_str())
            .bind(label_column(message.sentiment))
            .bind(i16::from(message.sentiment.binary))
            .bind(message.created_at)
            .bind(message.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Message::try_from(row)
    }

    async fn update(&self, update: MessageUpdate) -> DomainResult<Message> {
        let sql = format!(
            "UPDATE messages SET first_name = $1, last_name = $2, phone_number = $3,
                 email_address = $4, message = $5, sentiment_label = $6,
                 sentiment_binary = $7, updated_at = $8
             WHERE id = $9
             RETURNING {MESSAGE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, MessageRow>(&sql)
            .bind(update.first_name.as_str())
            .bind(update.last_name.as_str())
            .bind(update.phone_number.as_str())
            .bind(update.email_address.as_str())
            .bind(update.text.as_str())
            .bind(label_column(update.sentiment))
            .bind(i16::from(update.sentiment.binary))
            .bind(update.updated_at)
            .bind(i64::from(update.id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("message not found".into()))?;

        Message::try_from(row)
    }

    async fn find_by_id(&self, id: MessageId) -> DomainResult<Option<Message>> {
        let sql = format!("SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = $1");
        let row = sqlx::query_as::<_, MessageRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Message::try_from).transpose()
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Message>, Option<ListCursor>)> {
        let limit = limit.clamp(1, 100);

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(MESSAGE_COLUMNS);
        builder.push(" FROM messages");
        if let Some(cursor) = cursor {
            builder.push(" WHERE (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(limit) + 1);

        let rows = builder
            .build_query_as::<MessageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut messages = rows
            .into_iter()
            .map(Message::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if messages.len() > limit as usize {
            messages.pop();
            next_cursor = messages
                .last()
                .map(|last| ListCursor::new(last.created_at, i64::from(last.id)));
        }

        Ok((messages, next_cursor))
    }
}
