//! Shareable metadata for `schema_core` registries.
//!
//! Every vocabulary in this crate is **registry-first**: a `const` table of entries keyed by a stable id.
//! This module provides the small, dependency-free metadata shape reused by those tables.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; behavior lives in the builder crate.
//!
//! ## See also
//! - [`crate::annotations`]
//! - [`crate::locations`]

/// Shared metadata shape for registry items.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description`)
///
/// ## Notes
/// - `description` is mandatory to keep generated docs consistent.
#[derive(Debug, Clone, Copy)]
pub struct VocabItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl<Id> VocabItemInfo<Id> {
    /// Return `true` if `spelling` is the canonical spelling or one of the aliases.
    pub fn matches(&self, spelling: &str) -> bool {
        self.canonical == spelling || self.aliases.contains(&spelling)
    }

    /// Iterate over every accepted spelling, canonical first.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.canonical).chain(self.aliases.iter().copied())
    }
}
