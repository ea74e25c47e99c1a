//! GraphQL directive location vocabulary.
//!
//! Directive definitions declare the locations they may be placed on; directive instances record the
//! location they were placed on. Both use the spellings of the GraphQL specification (`ENUM`,
//! `ENUM_VALUE`, ...).
//!
//! ## Examples
//! ```rust
//! use schema_core::locations::{self, DirectiveLocation};
//!
//! assert_eq!(locations::from_str("ENUM"), Some(DirectiveLocation::Enum));
//! assert_eq!(DirectiveLocation::FieldDefinition.to_string(), "FIELD_DEFINITION");
//! ```

use std::fmt;

use crate::registry::VocabItemInfo;

/// Stable identifier for directive locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    // Type system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

/// Metadata entry for a directive location.
pub type LocationInfo = VocabItemInfo<DirectiveLocation>;

/// Registry of directive locations.
pub const LOCATIONS: &[LocationInfo] = &[
    info(DirectiveLocation::Query, "QUERY", "A query operation."),
    info(DirectiveLocation::Mutation, "MUTATION", "A mutation operation."),
    info(DirectiveLocation::Subscription, "SUBSCRIPTION", "A subscription operation."),
    info(DirectiveLocation::Field, "FIELD", "A field selection."),
    info(
        DirectiveLocation::FragmentDefinition,
        "FRAGMENT_DEFINITION",
        "A fragment definition.",
    ),
    info(DirectiveLocation::FragmentSpread, "FRAGMENT_SPREAD", "A fragment spread."),
    info(DirectiveLocation::InlineFragment, "INLINE_FRAGMENT", "An inline fragment."),
    info(
        DirectiveLocation::VariableDefinition,
        "VARIABLE_DEFINITION",
        "An operation variable definition.",
    ),
    info(DirectiveLocation::Schema, "SCHEMA", "The schema definition."),
    info(DirectiveLocation::Scalar, "SCALAR", "A scalar type."),
    info(DirectiveLocation::Object, "OBJECT", "An object type."),
    info(
        DirectiveLocation::FieldDefinition,
        "FIELD_DEFINITION",
        "A field of an object or interface type.",
    ),
    info(
        DirectiveLocation::ArgumentDefinition,
        "ARGUMENT_DEFINITION",
        "An argument of a field definition.",
    ),
    info(DirectiveLocation::Interface, "INTERFACE", "An interface type."),
    info(DirectiveLocation::Union, "UNION", "A union type."),
    info(DirectiveLocation::Enum, "ENUM", "An enum type."),
    info(DirectiveLocation::EnumValue, "ENUM_VALUE", "A value of an enum type."),
    info(DirectiveLocation::InputObject, "INPUT_OBJECT", "An input object type."),
    info(
        DirectiveLocation::InputFieldDefinition,
        "INPUT_FIELD_DEFINITION",
        "A field of an input object type.",
    ),
];

/// Resolve a location spelling (e.g. `"ENUM_VALUE"`) to its id.
pub fn from_str(name: &str) -> Option<DirectiveLocation> {
    LOCATIONS.iter().find(|l| l.matches(name)).map(|l| l.id)
}

/// Return the canonical spelling for a location.
pub fn as_str(id: DirectiveLocation) -> &'static str {
    info_for(id).canonical
}

/// Return the metadata entry for a location.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DirectiveLocation) -> &'static LocationInfo {
    LOCATIONS
        .iter()
        .find(|l| l.id == id)
        .expect("directive location info missing")
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

const fn info(id: DirectiveLocation, canonical: &'static str, description: &'static str) -> LocationInfo {
    VocabItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DirectiveLocation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(as_str(*self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DirectiveLocation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spelling = <String as serde::Deserialize>::deserialize(deserializer)?;
        from_str(&spelling)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown directive location `{spelling}`")))
    }
}
