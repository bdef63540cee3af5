// src/domain/post/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

pub const TITLE_MAX_CHARS: usize = 200;
pub const SLUG_MAX_CHARS: usize = 220;
pub const EXCERPT_MAX_CHARS: usize = 300;
pub const AUTHOR_MAX_CHARS: usize = 120;
pub const DEFAULT_AUTHOR: &str = "Anonyme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("post id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if trimmed.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "title must be at most {TITLE_MAX_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe post identifier: lowercase ASCII letters and digits in
/// hyphen-separated groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > SLUG_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "slug must be at most {SLUG_MAX_CHARS} characters"
            )));
        }
        if !is_slug_token(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must contain only lowercase letters, digits and single hyphens"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_slug_token(value: &str) -> bool {
    value.split('-').all(|group| {
        !group.is_empty()
            && group
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostExcerpt(String);

impl PostExcerpt {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > EXCERPT_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "excerpt must be at most {EXCERPT_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostAuthor(String);

impl PostAuthor {
    /// Blank or missing authors fall back to [`DEFAULT_AUTHOR`].
    pub fn new(value: Option<String>) -> DomainResult<Self> {
        let value = match value {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            _ => return Ok(Self::default()),
        };
        if value.chars().count() > AUTHOR_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "author must be at most {AUTHOR_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for PostAuthor {
    fn default() -> Self {
        Self(DEFAULT_AUTHOR.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technologie,
    Developpement,
    Accessibilite,
    Performance,
    Architecture,
    Education,
    Securite,
    AlphaBeta,
    Gadget,
    Design,
    Autre,
}

impl Category {
    pub const ALL: [Self; 11] = [
        Self::Technologie,
        Self::Developpement,
        Self::Accessibilite,
        Self::Performance,
        Self::Architecture,
        Self::Education,
        Self::Securite,
        Self::AlphaBeta,
        Self::Gadget,
        Self::Design,
        Self::Autre,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technologie => "technologie",
            Self::Developpement => "developpement",
            Self::Accessibilite => "accessibilite",
            Self::Performance => "performance",
            Self::Architecture => "architecture",
            Self::Education => "education",
            Self::Securite => "securite",
            Self::AlphaBeta => "alpha_beta",
            Self::Gadget => "gadget",
            Self::Design => "design",
            Self::Autre => "autre",
        }
    }

    /// Human readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technologie => "Technologie",
            Self::Developpement => "Développement",
            Self::Accessibilite => "Accessibilité",
            Self::Performance => "Performance",
            Self::Architecture => "Architecture",
            Self::Education => "Éducation",
            Self::Securite => "Sécurité",
            Self::AlphaBeta => "Alpha/Beta",
            Self::Gadget => "Gadget",
            Self::Design => "Design",
            Self::Autre => "Autre",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| DomainError::Validation(format!("unknown category: {value}")))
    }
}
