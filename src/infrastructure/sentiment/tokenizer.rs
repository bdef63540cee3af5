// src/infrastructure/sentiment/tokenizer.rs
use regex::Regex;
use std::collections::HashSet;

/// Word pattern used when the classifier was fitted: runs of two or more
/// word characters.
const TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    lowercase: bool,
    stop_words: HashSet<String>,
    ngram_range: (usize, usize),
}

impl Tokenizer {
    pub fn new(
        lowercase: bool,
        stop_words: impl IntoIterator<Item = String>,
        ngram_range: (usize, usize),
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(TOKEN_PATTERN)?,
            lowercase,
            stop_words: stop_words.into_iter().collect(),
            ngram_range,
        })
    }

    /// Word n-grams of `text`, stop words removed before the n-grams are built.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let words: Vec<&str> = self
            .pattern
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|word| !self.stop_words.contains(*word))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n {
            if n == 0 || n > words.len() {
                continue;
            }
            terms.extend(words.windows(n).map(|window| window.join(" ")));
        }
        terms
    }
}
