// src/application/dto/mod.rs
pub mod messages;
pub mod pagination;
pub mod posts;
pub mod serde_time;

pub use messages::{MessageDto, SatisfactionDto};
pub use pagination::CursorPage;
pub use posts::PostDto;
