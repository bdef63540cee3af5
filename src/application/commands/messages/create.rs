// src/application/commands/messages/create.rs
use super::MessageCommandService;
use crate::{
    application::{dto::MessageDto, error::ApplicationResult},
    domain::{
        derivation::{WriteKind, WritePhase},
        message::{EmailAddress, MessageText, NewMessage, PersonName, PhoneNumber},
        sentiment::Sentiment,
    },
};

pub struct CreateMessageCommand {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub message: Option<String>,
}

impl MessageCommandService {
    pub async fn create_message(
        &self,
        command: CreateMessageCommand,
    ) -> ApplicationResult<MessageDto> {
        let first_name = PersonName::new("first_name", command.first_name)?;
        let last_name = PersonName::new("last_name", command.last_name)?;
        let phone_number = PhoneNumber::new(command.phone_number)?;
        let email_address = EmailAddress::new(command.email_address)?;
        let text = MessageText::new(command.message.unwrap_or_default());
        let now = self.clock.now();

        tracing::debug!(
            phase = %WritePhase::Pending,
            kind = %WriteKind::Create,
            blank_text = text.is_blank(),
            "creating message"
        );
        let sentiment = self.sentiment_for(WriteKind::Create, &text, Sentiment::UNSCORED);

        let created = self
            .repo
            .insert(NewMessage {
                first_name,
                last_name,
                phone_number,
                email_address,
                text,
                sentiment,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            phase = %WritePhase::Persisted,
            id = i64::from(created.id),
            binary = created.sentiment.binary,
            "message stored"
        );
        Ok(created.into())
    }
}
