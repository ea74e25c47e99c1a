#![forbid(unsafe_code)]
//! Enum type extraction for an annotation-driven GraphQL schema builder.
//!
//! This crate turns a reflected class (its fields and annotations, supplied as plain data) into a normalized,
//! serializable [`EnumType`] descriptor for a later schema-assembly stage.
//!
//! ## Layout
//!
//! - [`introspect`] - input model (classes, fields, annotations, the JSON class index)
//! - [`model`] - output model (enum types, directive types and instances, references)
//! - [`helpers`] - pluggable collaborators (naming, descriptions, ignore policy, directive registry)
//! - [`creator`] - the [`Creator`] trait and [`EnumCreator`]
//! - [`cli`] - the `schema-builder` command line
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use schema_builder::{ClassInfo, Creator, EnumCreator, Reference, ReferenceType, SchemaConfig};
//!
//! let suit = ClassInfo::enumeration("com.example.Suit", ["HEARTS", "DIAMONDS", "CLUBS", "SPADES"]);
//! let reference = Reference::new("com.example.Suit", "Suit", ReferenceType::Enum);
//! let enum_type = EnumCreator::from_config(&SchemaConfig::default()).create(&suit, &reference).unwrap();
//!
//! assert_eq!(enum_type.name, "Suit");
//! assert_eq!(enum_type.value_names(), ["HEARTS", "DIAMONDS", "CLUBS", "SPADES"]);
//! ```

pub mod cli;
pub mod config;
pub mod creator;
pub mod errors;
pub mod helpers;
pub mod introspect;
pub mod model;

pub use config::SchemaConfig;
pub use creator::{Creator, EnumCreator};
pub use errors::{SchemaError, SchemaResult};
pub use introspect::{AnnotationValue, Annotations, ClassIndex, ClassInfo, FieldInfo, TypeKind, TypeRef};
pub use model::{DirectiveInstance, DirectiveType, EnumType, EnumValue, Reference, ReferenceType};
