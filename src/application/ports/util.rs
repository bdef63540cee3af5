// src/application/ports/util.rs
/// Turns free text into a lowercase, hyphen-separated ASCII token.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
