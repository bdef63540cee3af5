// src/domain/post/services/slug.rs
//! Unique slug assignment.
//!
//! The title is normalized by a [`SlugGenerator`] into a base token, then
//! `base`, `base-2`, `base-3`, ... are probed until the `exists` predicate
//! reports a free candidate. Nothing here touches storage; the caller decides
//! what `exists` looks at and persists the result.

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::PostSlug;

/// Longest base token kept before suffixing, leaving room for `-N` within
/// [`SLUG_MAX_CHARS`](crate::domain::post::value_objects::SLUG_MAX_CHARS).
pub const BASE_MAX_CHARS: usize = 200;

/// First numeric suffix tried after the bare base.
pub const FIRST_SUFFIX: u64 = 2;

pub fn normalize_base(title: &str, generator: &dyn SlugGenerator) -> DomainResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::Validation("title cannot be empty".into()));
    }

    let mut base = generator.slugify(title);
    if base.len() > BASE_MAX_CHARS {
        let mut cut = BASE_MAX_CHARS;
        while !base.is_char_boundary(cut) {
            cut -= 1;
        }
        base.truncate(cut);
        let trimmed_len = base.trim_end_matches('-').len();
        base.truncate(trimmed_len);
    }

    if base.is_empty() {
        return Err(DomainError::Validation(format!(
            "title `{title}` does not produce a usable slug"
        )));
    }
    Ok(base)
}

pub fn probe_candidates(
    base: &str,
    mut exists: impl FnMut(&str) -> bool,
) -> DomainResult<PostSlug> {
    if !exists(base) {
        return PostSlug::new(base);
    }

    let mut suffix = FIRST_SUFFIX;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !exists(&candidate) {
            return PostSlug::new(candidate);
        }
        suffix = suffix
            .checked_add(1)
            .ok_or_else(|| DomainError::Conflict(format!("slug suffixes exhausted for `{base}`")))?;
    }
}

/// Normalize `title` and return the first slug candidate `exists` rejects.
pub fn assign_slug(
    title: &str,
    generator: &dyn SlugGenerator,
    exists: impl FnMut(&str) -> bool,
) -> DomainResult<PostSlug> {
    let base = normalize_base(title, generator)?;
    probe_candidates(&base, exists)
}
