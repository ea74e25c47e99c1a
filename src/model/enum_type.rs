//! Enum type descriptors.

use serde::{Deserialize, Serialize};

use super::directive::DirectiveInstance;

/// One constant of an enum type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub directive_instances: Vec<DirectiveInstance>,
}

impl EnumValue {
    pub fn new(description: Option<String>, value: impl Into<String>, directive_instances: Vec<DirectiveInstance>) -> Self {
        Self {
            value: value.into(),
            description,
            directive_instances,
        }
    }

    pub fn add_directive_instance(&mut self, directive_instance: DirectiveInstance) {
        self.directive_instances.push(directive_instance);
    }

    pub fn has_directive(&self, name: &str) -> bool {
        self.directive_instances.iter().any(|d| d.name == name)
    }
}

/// An enum type, ready for schema assembly.
///
/// `values` keeps the declaration order of the source constants; that order is visible in the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    /// Fully-qualified name of the class this type was created from.
    pub class_name: String,
    /// Public schema name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub directive_instances: Vec<DirectiveInstance>,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl EnumType {
    pub fn new(class_name: impl Into<String>, name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            class_name: class_name.into(),
            name: name.into(),
            description,
            directive_instances: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn add_value(&mut self, value: EnumValue) {
        self.values.push(value);
    }

    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.value == name)
    }

    /// Value names in schema order.
    pub fn value_names(&self) -> Vec<&str> {
        self.values.iter().map(|v| v.value.as_str()).collect()
    }
}
