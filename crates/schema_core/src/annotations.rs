//! Well-known annotation kinds.
//!
//! Annotation kinds are identified by their fully-qualified name (e.g.
//! `org.eclipse.microprofile.graphql.Description`). This registry centralizes the kinds the builder
//! gives meaning to, so callers never compare raw strings.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Legacy namespaces (e.g. `javax.*`) are registered as aliases of their current spelling.
//! - Kinds not listed here are still carried by the builder (they may be bound to directives), they just have no
//!   built-in meaning.
//!
//! ## Examples
//! ```rust
//! use schema_core::annotations::{self, AnnotationId};
//!
//! assert_eq!(annotations::from_str("Description"), Some(AnnotationId::Description));
//! assert_eq!(annotations::as_str(AnnotationId::Deprecated), "java.lang.Deprecated");
//! assert!(annotations::DEPRECATION_KINDS.contains(&AnnotationId::GraphqlDeprecated));
//! ```

use crate::registry::VocabItemInfo;

/// Stable identifier for annotation kinds with built-in meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationId {
    Name,
    Enum,
    Type,
    Input,
    Interface,
    Description,
    Ignore,
    JsonbTransient,
    JsonIgnore,
    /// The language-native deprecation marker. Carries no reason.
    Deprecated,
    /// The GraphQL deprecation annotation. Carries an optional `reason`.
    GraphqlDeprecated,
}

/// Named parameter carrying the deprecation reason on [`AnnotationId::GraphqlDeprecated`].
pub const DEPRECATION_REASON_PARAM: &str = "reason";

/// Metadata entry for an annotation kind.
pub type AnnotationInfo = VocabItemInfo<AnnotationId>;

/// Registry of annotation kinds with built-in meaning.
pub const ANNOTATIONS: &[AnnotationInfo] = &[
    info(
        AnnotationId::Name,
        "org.eclipse.microprofile.graphql.Name",
        &["Name"],
        "Override the public name of a type, field or argument.",
    ),
    info(
        AnnotationId::Enum,
        "org.eclipse.microprofile.graphql.Enum",
        &["Enum"],
        "Mark a class as a GraphQL enum, optionally naming it.",
    ),
    info(
        AnnotationId::Type,
        "org.eclipse.microprofile.graphql.Type",
        &["Type"],
        "Mark a class as a GraphQL output type, optionally naming it.",
    ),
    info(
        AnnotationId::Input,
        "org.eclipse.microprofile.graphql.Input",
        &["Input"],
        "Mark a class as a GraphQL input type, optionally naming it.",
    ),
    info(
        AnnotationId::Interface,
        "org.eclipse.microprofile.graphql.Interface",
        &["Interface"],
        "Mark a class as a GraphQL interface, optionally naming it.",
    ),
    info(
        AnnotationId::Description,
        "org.eclipse.microprofile.graphql.Description",
        &["Description"],
        "Attach a human-readable description to a schema element.",
    ),
    info(
        AnnotationId::Ignore,
        "org.eclipse.microprofile.graphql.Ignore",
        &["Ignore"],
        "Exclude a member from the schema.",
    ),
    info(
        AnnotationId::JsonbTransient,
        "jakarta.json.bind.annotation.JsonbTransient",
        &["javax.json.bind.annotation.JsonbTransient", "JsonbTransient"],
        "Exclude a member from JSON-B binding, and therefore from the schema.",
    ),
    info(
        AnnotationId::JsonIgnore,
        "com.fasterxml.jackson.annotation.JsonIgnore",
        &["JsonIgnore"],
        "Exclude a member from Jackson binding, and therefore from the schema.",
    ),
    info(
        AnnotationId::Deprecated,
        "java.lang.Deprecated",
        &["Deprecated"],
        "Language-native deprecation marker.",
    ),
    info(
        AnnotationId::GraphqlDeprecated,
        "io.smallrye.graphql.api.Deprecated",
        &[],
        "GraphQL deprecation with an optional reason.",
    ),
];

/// Kinds whose value is a description, in lookup priority order.
pub const DESCRIPTION_KINDS: &[AnnotationId] = &[AnnotationId::Description];

/// Kinds that exclude a member from the schema.
pub const IGNORE_KINDS: &[AnnotationId] = &[AnnotationId::Ignore, AnnotationId::JsonbTransient, AnnotationId::JsonIgnore];

/// Kinds that mark a member as deprecated, in lookup priority order (the reason-bearing kind first).
pub const DEPRECATION_KINDS: &[AnnotationId] = &[AnnotationId::GraphqlDeprecated, AnnotationId::Deprecated];

/// Resolve an annotation spelling to its stable id.
///
/// ## Returns
/// - `Some(AnnotationId)` if the spelling is a canonical name or an alias.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<AnnotationId> {
    if let Some(info) = ANNOTATIONS.iter().find(|a| a.canonical == name) {
        return Some(info.id);
    }
    ANNOTATIONS
        .iter()
        .find(|a| {
            let aliases: &[&str] = a.aliases;
            aliases.contains(&name)
        })
        .map(|a| a.id)
}

/// Return the canonical (fully-qualified) spelling for an annotation kind.
pub fn as_str(id: AnnotationId) -> &'static str {
    info_for(id).canonical
}

/// Return the metadata entry for an annotation kind.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: AnnotationId) -> &'static AnnotationInfo {
    ANNOTATIONS
        .iter()
        .find(|a| a.id == id)
        .expect("annotation info missing")
}

const fn info(
    id: AnnotationId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> AnnotationInfo {
    VocabItemInfo {
        id,
        canonical,
        aliases,
        description,
    }
}
