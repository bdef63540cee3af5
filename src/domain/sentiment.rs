// src/domain/sentiment.rs
use crate::application::ports::sentiment::SentimentScorer;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Positive" => Ok(Self::Positive),
            "Negative" => Ok(Self::Negative),
            other => Err(DomainError::Validation(format!(
                "unknown sentiment label: {other}"
            ))),
        }
    }
}

/// Derived sentiment of a message text.
///
/// `binary` is `1` only for a positive label. An unscored (blank) text and a
/// negative text both encode as `0`; read `label` to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentiment {
    pub label: Option<SentimentLabel>,
    pub binary: u8,
}

impl Sentiment {
    pub const UNSCORED: Self = Self {
        label: None,
        binary: 0,
    };

    pub const fn from_label(label: Option<SentimentLabel>) -> Self {
        let binary = match label {
            Some(SentimentLabel::Positive) => 1,
            Some(SentimentLabel::Negative) | None => 0,
        };
        Self { label, binary }
    }

    /// Rebuild from persisted columns, rejecting rows whose binary value
    /// disagrees with the label.
    pub fn from_stored(label: Option<&str>, binary: i16) -> DomainResult<Self> {
        let label = label.map(SentimentLabel::from_str).transpose()?;
        let sentiment = Self::from_label(label);
        if i16::from(sentiment.binary) != binary {
            return Err(DomainError::Validation(format!(
                "stored sentiment binary {binary} does not match label {label:?}"
            )));
        }
        Ok(sentiment)
    }
}

/// Score `text`, skipping the scorer entirely for absent or blank input.
pub fn derive_sentiment(text: Option<&str>, scorer: &dyn SentimentScorer) -> Sentiment {
    match text {
        Some(value) if !value.trim().is_empty() => {
            Sentiment::from_label(Some(scorer.score(value)))
        }
        _ => Sentiment::UNSCORED,
    }
}
