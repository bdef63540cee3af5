// src/application/commands/messages/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{sentiment::SentimentScorer, time::Clock},
    domain::{
        derivation::{MESSAGE_SENTIMENT, WriteKind},
        message::{MessageRepository, MessageText},
        sentiment::{Sentiment, derive_sentiment},
    },
};

pub struct MessageCommandService {
    pub(super) repo: Arc<dyn MessageRepository>,
    pub(super) scorer: Arc<dyn SentimentScorer>,
    pub(super) clock: Arc<dyn Clock>,
}

impl MessageCommandService {
    pub fn new(
        repo: Arc<dyn MessageRepository>,
        scorer: Arc<dyn SentimentScorer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            scorer,
            clock,
        }
    }

    /// Sentiment for the text about to be written, or `previous` when the
    /// policy does not ask for a recomputation on this kind of write.
    pub(super) fn sentiment_for(
        &self,
        kind: WriteKind,
        text: &MessageText,
        previous: Sentiment,
    ) -> Sentiment {
        if !MESSAGE_SENTIMENT.applies(kind) {
            return previous;
        }
        let sentiment = derive_sentiment(Some(text.as_str()), self.scorer.as_ref());
        tracing::debug!(
            kind = %kind,
            label = ?sentiment.label,
            binary = sentiment.binary,
            "message sentiment derived"
        );
        sentiment
    }
}
