// src/application/queries/mod.rs
pub mod messages;
pub mod posts;
pub mod satisfaction;

mod paging;
