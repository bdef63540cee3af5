// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_message;
mod postgres_post;

pub use error::map_sqlx;
pub use postgres_message::PostgresMessageRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
