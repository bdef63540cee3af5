// src/domain/derivation.rs
//! Recomputation policies for fields derived at write time.
//!
//! A post slug is computed once when the post is created and is never touched
//! again. A message sentiment is recomputed on every write that carries the
//! message text. Both rules are expressed as a [`DerivationPolicy`] attached to
//! a [`DerivedField`] so command services ask the policy instead of branching
//! on the field name.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationPolicy {
    /// Derived on creation only; immutable afterwards.
    WriteOnce,
    /// Derived again on every write of the owning entity.
    EveryWrite,
}

impl DerivationPolicy {
    pub const fn applies(self, kind: WriteKind) -> bool {
        match self {
            Self::WriteOnce => matches!(kind, WriteKind::Create),
            Self::EveryWrite => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedField {
    pub name: &'static str,
    pub policy: DerivationPolicy,
}

impl DerivedField {
    pub const fn new(name: &'static str, policy: DerivationPolicy) -> Self {
        Self { name, policy }
    }

    pub const fn applies(&self, kind: WriteKind) -> bool {
        self.policy.applies(kind)
    }
}

pub const POST_SLUG: DerivedField = DerivedField::new("post.slug", DerivationPolicy::WriteOnce);
pub const MESSAGE_SENTIMENT: DerivedField =
    DerivedField::new("message.sentiment", DerivationPolicy::EveryWrite);

/// Lifecycle of a single entity write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePhase {
    Pending,
    Persisted,
}

impl fmt::Display for WritePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Persisted => f.write_str("persisted"),
        }
    }
}

impl fmt::Display for WriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Update => f.write_str("update"),
        }
    }
}
