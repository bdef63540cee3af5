// src/application/ports/mod.rs
pub mod sentiment;
pub mod time;
pub mod util;
