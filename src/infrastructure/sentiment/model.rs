// src/infrastructure/sentiment/model.rs
use super::tokenizer::Tokenizer;
use crate::application::ports::sentiment::SentimentScorer;
use crate::domain::sentiment::SentimentLabel;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Artifact layout understood by this loader.
pub const SCHEMA_VERSION: u32 = 1;

const MAX_NGRAM: usize = 3;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to read sentiment model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid sentiment model {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported sentiment model schema_version {0} (expected {SCHEMA_VERSION})")]
    UnsupportedSchema(u32),
    #[error("invalid sentiment model: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TermWeights {
    pub idf: f64,
    pub weight: f64,
}

/// Serialized TF-IDF vocabulary plus linear decision weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub schema_version: u32,
    pub version: String,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    #[serde(default)]
    pub stop_words: Vec<String>,
    pub vocabulary: HashMap<String, TermWeights>,
    pub intercept: f64,
}

const fn default_ngram_range() -> (usize, usize) {
    (1, 2)
}

const fn default_lowercase() -> bool {
    true
}

impl ModelArtifact {
    fn validate(&self) -> Result<(), ModelLoadError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ModelLoadError::UnsupportedSchema(self.schema_version));
        }
        if self.version.trim().is_empty() {
            return Err(ModelLoadError::Invalid("version is empty".into()));
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n || max_n > MAX_NGRAM {
            return Err(ModelLoadError::Invalid(format!(
                "ngram_range ({min_n}, {max_n}) must satisfy 1 <= min <= max <= {MAX_NGRAM}"
            )));
        }
        if self.vocabulary.is_empty() {
            return Err(ModelLoadError::Invalid("vocabulary is empty".into()));
        }
        if !self.intercept.is_finite() {
            return Err(ModelLoadError::Invalid("intercept is not finite".into()));
        }
        for (term, weights) in &self.vocabulary {
            if !weights.weight.is_finite() || !weights.idf.is_finite() || weights.idf <= 0.0 {
                return Err(ModelLoadError::Invalid(format!(
                    "term `{term}` has non-finite weight or non-positive idf"
                )));
            }
        }
        Ok(())
    }
}

/// Linear classifier over l2-normalized TF-IDF features.
///
/// Immutable once built; share it behind an `Arc` for the process lifetime.
#[derive(Debug, Clone)]
pub struct LinearSentimentModel {
    version: String,
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, TermWeights>,
    intercept: f64,
}

impl LinearSentimentModel {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|source| ModelLoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let model = Self::from_artifact(artifact)?;
        tracing::info!(
            path = %path.display(),
            version = %model.version,
            terms = model.vocabulary.len(),
            "sentiment model loaded"
        );
        Ok(model)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelLoadError> {
        artifact.validate()?;
        let tokenizer = Tokenizer::new(
            artifact.lowercase,
            artifact.stop_words,
            artifact.ngram_range,
        )
        .map_err(|err| ModelLoadError::Invalid(err.to_string()))?;

        Ok(Self {
            version: artifact.version,
            tokenizer,
            vocabulary: artifact.vocabulary,
            intercept: artifact.intercept,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Signed distance from the decision boundary; positive means `Positive`.
    pub fn decision_value(&self, text: &str) -> f64 {
        let mut counts: HashMap<&str, f64> = HashMap::new();
        let terms = self.tokenizer.terms(text);
        for term in &terms {
            if self.vocabulary.contains_key(term.as_str()) {
                *counts.entry(term.as_str()).or_insert(0.0) += 1.0;
            }
        }

        let features: Vec<(f64, f64)> = counts
            .into_iter()
            .map(|(term, count)| {
                let weights = self.vocabulary[term];
                (count * weights.idf, weights.weight)
            })
            .collect();

        let norm = features
            .iter()
            .map(|(value, _)| value * value)
            .sum::<f64>()
            .sqrt();
        if norm == 0.0 {
            return self.intercept;
        }

        self.intercept
            + features
                .iter()
                .map(|(value, weight)| (value / norm) * weight)
                .sum::<f64>()
    }
}

impl SentimentScorer for LinearSentimentModel {
    fn score(&self, text: &str) -> SentimentLabel {
        if self.decision_value(text) > 0.0 {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact() -> ModelArtifact {
        let vocabulary = [
            ("love", 2.5),
            ("good", 1.8),
            ("great", 2.0),
            ("not", -0.6),
            ("terrible", -2.6),
            ("hate", -2.4),
            ("not good", -3.0),
        ]
        .into_iter()
        .map(|(term, weight)| (term.to_string(), TermWeights { idf: 3.0, weight }))
        .collect();

        ModelArtifact {
            schema_version: SCHEMA_VERSION,
            version: "test-1".into(),
            ngram_range: (1, 2),
            lowercase: true,
            stop_words: vec!["this".into(), "is".into(), "the".into()],
            vocabulary,
            intercept: -0.1,
        }
    }

    fn model() -> LinearSentimentModel {
        LinearSentimentModel::from_artifact(artifact()).unwrap()
    }

    #[test]
    fn scores_positive_and_negative_text() {
        let model = model();
        assert_eq!(model.score("I love this"), SentimentLabel::Positive);
        assert_eq!(model.score("This is TERRIBLE"), SentimentLabel::Negative);
    }

    #[test]
    fn negation_bigram_outweighs_the_unigram() {
        assert_eq!(model().score("not good"), SentimentLabel::Negative);
    }

    #[test]
    fn unknown_words_fall_back_to_the_intercept() {
        let model = model();
        assert!((model.decision_value("zzz qqq") - (-0.1)).abs() < f64::EPSILON);
        assert_eq!(model.score("zzz qqq"), SentimentLabel::Negative);
    }

    #[test]
    fn scoring_is_deterministic() {
        let model = model();
        let text = "good, great, but I hate the ending";
        assert_eq!(model.decision_value(text), model.decision_value(text));
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let mut bad = artifact();
        bad.schema_version = 2;
        assert!(matches!(
            LinearSentimentModel::from_artifact(bad),
            Err(ModelLoadError::UnsupportedSchema(2))
        ));
    }

    #[test]
    fn rejects_empty_vocabulary_and_bad_numbers() {
        let mut empty = artifact();
        empty.vocabulary.clear();
        assert!(matches!(
            LinearSentimentModel::from_artifact(empty),
            Err(ModelLoadError::Invalid(_))
        ));

        let mut nan = artifact();
        nan.vocabulary.insert(
            "odd".into(),
            TermWeights {
                idf: 1.0,
                weight: f64::NAN,
            },
        );
        assert!(LinearSentimentModel::from_artifact(nan).is_err());

        let mut ngrams = artifact();
        ngrams.ngram_range = (2, 1);
        assert!(LinearSentimentModel::from_artifact(ngrams).is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&artifact()).unwrap().as_bytes())
            .unwrap();
        let model = LinearSentimentModel::load(file.path()).unwrap();
        assert_eq!(model.version(), "test-1");
    }

    #[test]
    fn missing_or_corrupt_files_are_load_errors() {
        assert!(matches!(
            LinearSentimentModel::load("/nonexistent/sentiment_model.json"),
            Err(ModelLoadError::Io { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(
            LinearSentimentModel::load(file.path()),
            Err(ModelLoadError::Parse { .. })
        ));
    }

    #[test]
    fn bundled_model_loads_and_scores() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("models/sentiment_model.json");
        let model = LinearSentimentModel::load(path).unwrap();
        assert_eq!(model.score("I love this"), SentimentLabel::Positive);
        assert_eq!(model.score("This was a terrible experience"), SentimentLabel::Negative);
    }
}
