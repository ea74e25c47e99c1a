//! References to types that are not (yet) fully resolved.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The kind of schema type a reference points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceType {
    Input,
    Type,
    Enum,
    Interface,
    Union,
    Scalar,
}

/// A lightweight pointer to a schema type.
///
/// `class_parametrized_types` carries the type arguments of a generic owner (`Page<Book>` has `T -> Book`).
/// It only influences naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub class_name: String,
    pub name: String,
    pub reference_type: ReferenceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_parametrized_types: Option<IndexMap<String, Reference>>,
}

impl Reference {
    pub fn new(class_name: impl Into<String>, name: impl Into<String>, reference_type: ReferenceType) -> Self {
        Self {
            class_name: class_name.into(),
            name: name.into(),
            reference_type,
            class_parametrized_types: None,
        }
    }

    /// Bind type variable `variable` to `reference`, keeping binding order.
    pub fn with_parametrized_type(mut self, variable: impl Into<String>, reference: Reference) -> Self {
        self.class_parametrized_types
            .get_or_insert_with(IndexMap::new)
            .insert(variable.into(), reference);
        self
    }

    pub fn class_parametrized_types(&self) -> Option<&IndexMap<String, Reference>> {
        self.class_parametrized_types.as_ref()
    }
}
