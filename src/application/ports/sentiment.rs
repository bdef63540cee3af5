// src/application/ports/sentiment.rs
use crate::domain::sentiment::SentimentLabel;

/// Pretrained text classifier. Loaded once at startup and shared read-only;
/// scoring itself cannot fail. Callers only pass non-blank text.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentLabel;
}
