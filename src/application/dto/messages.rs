// src/application/dto/messages.rs
use crate::domain::message::Message;
use crate::domain::sentiment::{Sentiment, SentimentLabel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub message: String,
    /// `null` when the message text was blank.
    pub sentiment_label: Option<SentimentLabel>,
    /// `1` for a positive label, `0` otherwise (including unscored text).
    pub sentiment_binary: u8,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.into(),
            first_name: message.first_name.into_inner(),
            last_name: message.last_name.into_inner(),
            phone_number: message.phone_number.into_inner(),
            email_address: message.email_address.into_inner(),
            message: message.text.into_inner(),
            sentiment_label: message.sentiment.label,
            sentiment_binary: message.sentiment.binary,
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SatisfactionDto {
    pub satisfaction: u8,
    pub label: Option<SentimentLabel>,
}

impl From<Sentiment> for SatisfactionDto {
    fn from(sentiment: Sentiment) -> Self {
        Self {
            satisfaction: sentiment.binary,
            label: sentiment.label,
        }
    }
}
