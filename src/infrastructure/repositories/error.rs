// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_TITLE: &str = "posts_title_key";
const CNT_POST_SLUG_FORMAT: &str = "posts_slug_format_chk";
const CNT_MESSAGE_SENTIMENT_LABEL: &str = "messages_sentiment_label_chk";
const CNT_MESSAGE_SENTIMENT_BINARY: &str = "messages_sentiment_binary_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_POST_SLUG => DomainError::SlugConflict("slug already exists".into()),
        CNT_POST_TITLE => DomainError::Conflict("a post with this title already exists".into()),
        CNT_POST_SLUG_FORMAT => DomainError::Validation("slug is not URL-safe".into()),
        CNT_MESSAGE_SENTIMENT_LABEL | CNT_MESSAGE_SENTIMENT_BINARY => {
            DomainError::Validation("sentiment columns are inconsistent".into())
        }
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}
