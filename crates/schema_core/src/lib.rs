//! Provide the shared, pure vocabulary of the schema builder.
//!
//! This crate is intentionally small and dependency-free (serde support is opt-in via the `serde` feature). It names the things the builder reasons about
//! by stable identifier instead of by string comparison scattered across call sites:
//! - well-known annotation kinds (naming overrides, descriptions, ignore markers, deprecation), and
//! - GraphQL directive locations.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no builder-specific types.
//! - Registries live in `const` tables so docs, diagnostics and the builder all read the same spellings.
//!
//! ## Examples
//! ```rust
//! use schema_core::annotations::{self, AnnotationId};
//! use schema_core::locations::{self, DirectiveLocation};
//!
//! assert_eq!(annotations::from_str("org.eclipse.microprofile.graphql.Name"), Some(AnnotationId::Name));
//! assert_eq!(locations::as_str(DirectiveLocation::EnumValue), "ENUM_VALUE");
//! ```

pub mod annotations;
pub mod locations;
pub mod registry;
