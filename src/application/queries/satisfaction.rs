// src/application/queries/satisfaction.rs
use std::sync::Arc;

use crate::{
    application::{dto::SatisfactionDto, ports::sentiment::SentimentScorer},
    domain::sentiment::derive_sentiment,
};

pub struct AnalyzeSatisfactionQuery {
    pub message: Option<String>,
}

/// Scores free text without storing anything.
pub struct SatisfactionQueryService {
    scorer: Arc<dyn SentimentScorer>,
}

impl SatisfactionQueryService {
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    pub fn analyze(&self, query: &AnalyzeSatisfactionQuery) -> SatisfactionDto {
        derive_sentiment(query.message.as_deref(), self.scorer.as_ref()).into()
    }
}
