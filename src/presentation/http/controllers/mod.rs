// src/presentation/http/controllers/mod.rs
pub mod contact;
pub mod posts;
pub mod satisfaction;
