// src/domain/message/entity.rs
use crate::domain::message::value_objects::{
    EmailAddress, MessageId, MessageText, PersonName, PhoneNumber,
};
use crate::domain::sentiment::Sentiment;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub phone_number: PhoneNumber,
    pub email_address: EmailAddress,
    pub text: MessageText,
    pub sentiment: Sentiment,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMessage {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub phone_number: PhoneNumber,
    pub email_address: EmailAddress,
    pub text: MessageText,
    pub sentiment: Sentiment,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of a message's mutable columns. The text and its
/// sentiment always travel together so a stored label can never outlive the
/// text it was computed from.
#[derive(Debug, Clone)]
pub struct MessageUpdate {
    pub id: MessageId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub phone_number: PhoneNumber,
    pub email_address: EmailAddress,
    pub text: MessageText,
    pub sentiment: Sentiment,
    pub updated_at: DateTime<Utc>,
}

impl MessageUpdate {
    pub fn from_message(message: Message, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: message.id,
            first_name: message.first_name,
            last_name: message.last_name,
            phone_number: message.phone_number,
            email_address: message.email_address,
            text: message.text,
            sentiment: message.sentiment,
            updated_at,
        }
    }
}
