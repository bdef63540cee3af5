// src/domain/mod.rs
pub mod cursor;
pub mod derivation;
pub mod errors;
pub mod message;
pub mod post;
pub mod sentiment;
