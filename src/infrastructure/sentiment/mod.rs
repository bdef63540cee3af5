// src/infrastructure/sentiment/mod.rs
//! Pretrained sentiment classifier backing the
//! [`SentimentScorer`](crate::application::ports::sentiment::SentimentScorer) port.

mod model;
mod tokenizer;

pub use model::{LinearSentimentModel, ModelArtifact, ModelLoadError, SCHEMA_VERSION, TermWeights};
pub use tokenizer::Tokenizer;
