// src/application/commands/mod.rs
pub mod messages;
pub mod posts;
