//! Directive definitions and the instances placed on schema elements.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use schema_core::annotations::{self, AnnotationId, DEPRECATION_REASON_PARAM};
use schema_core::locations::DirectiveLocation;

/// Name of the built-in deprecation directive.
pub const DEPRECATED_DIRECTIVE_NAME: &str = "deprecated";

/// A declared argument of a directive type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveArgument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DirectiveArgument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// A directive definition, bound to the annotation kind that places it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveType {
    pub name: String,
    /// Fully-qualified annotation kind that places this directive.
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub locations: Vec<DirectiveLocation>,
    #[serde(default)]
    pub arguments: Vec<DirectiveArgument>,
}

impl DirectiveType {
    pub fn new(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            description: None,
            locations: Vec::new(),
            arguments: Vec::new(),
        }
    }

    /// The built-in `@deprecated(reason: String)` directive, bound to the GraphQL deprecation annotation.
    pub fn deprecated() -> Self {
        Self {
            description: Some("Marks the element as deprecated, optionally with a reason.".to_string()),
            locations: vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            arguments: vec![DirectiveArgument::new(DEPRECATION_REASON_PARAM)],
            ..Self::new(
                DEPRECATED_DIRECTIVE_NAME,
                annotations::as_str(AnnotationId::GraphqlDeprecated),
            )
        }
    }

    pub fn with_location(mut self, location: DirectiveLocation) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_argument(mut self, argument: DirectiveArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn allows(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    /// Comma-separated location spellings, for diagnostics.
    pub fn locations_list(&self) -> String {
        self.locations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A directive placed on one schema element, with its bound argument values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveInstance {
    pub name: String,
    pub location: DirectiveLocation,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub arguments: IndexMap<String, Value>,
}

impl DirectiveInstance {
    pub fn new(directive_type: &DirectiveType, location: DirectiveLocation) -> Self {
        Self {
            name: directive_type.name.clone(),
            location,
            arguments: IndexMap::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }
}
