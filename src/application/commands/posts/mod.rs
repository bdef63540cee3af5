// src/application/commands/posts/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreatePostCommand, CreatePostCommandBuilder};
pub use delete::DeletePostCommand;
pub use service::{DEFAULT_SLUG_MAX_ATTEMPTS, PostCommandService};
pub use update::UpdatePostCommand;
