// src/application/commands/messages/update.rs
use super::MessageCommandService;
use crate::{
    application::{
        dto::MessageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        derivation::{WriteKind, WritePhase},
        message::{EmailAddress, MessageId, MessageText, MessageUpdate, PersonName, PhoneNumber},
    },
};

#[derive(Default)]
pub struct UpdateMessageCommand {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
    pub message: Option<String>,
}

impl MessageCommandService {
    /// Update a message. The sentiment is derived again from whatever text the
    /// message holds after the update, replacing the stored label.
    pub async fn update_message(
        &self,
        command: UpdateMessageCommand,
    ) -> ApplicationResult<MessageDto> {
        let id = MessageId::new(command.id)
            .map_err(|_| ApplicationError::not_found("message not found"))?;
        let message = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("message not found"))?;

        let previous = message.sentiment;
        let mut update = MessageUpdate::from_message(message, self.clock.now());
        if let Some(first_name) = command.first_name {
            update.first_name = PersonName::new("first_name", first_name)?;
        }
        if let Some(last_name) = command.last_name {
            update.last_name = PersonName::new("last_name", last_name)?;
        }
        if let Some(phone_number) = command.phone_number {
            update.phone_number = PhoneNumber::new(phone_number)?;
        }
        if let Some(email_address) = command.email_address {
            update.email_address = EmailAddress::new(email_address)?;
        }
        if let Some(text) = command.message {
            update.text = MessageText::new(text);
        }

        tracing::debug!(
            phase = %WritePhase::Pending,
            kind = %WriteKind::Update,
            id = command.id,
            "updating message"
        );
        update.sentiment = self.sentiment_for(WriteKind::Update, &update.text, previous);

        let updated = self.repo.update(update).await?;
        tracing::info!(
            phase = %WritePhase::Persisted,
            id = command.id,
            binary = updated.sentiment.binary,
            "message updated"
        );
        Ok(updated.into())
    }
}
