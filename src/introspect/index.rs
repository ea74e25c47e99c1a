//! A JSON class index: the classes to build from, plus the directive types they may use.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::class_info::ClassInfo;
use crate::errors::{SchemaError, SchemaResult};
use crate::model::DirectiveType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassIndex {
    pub classes: Vec<ClassInfo>,
    pub directives: Vec<DirectiveType>,
}

impl ClassIndex {
    pub fn from_json(text: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> SchemaResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Look up every class in `names`, failing on the first unknown one.
    pub fn classes_named<'a>(&'a self, names: &[String]) -> SchemaResult<Vec<&'a ClassInfo>> {
        names
            .iter()
            .map(|name| self.class(name).ok_or_else(|| SchemaError::UnknownClass(name.clone())))
            .collect()
    }

    /// Classes declared as enumerations, in index order.
    pub fn enums(&self) -> impl Iterator<Item = &ClassInfo> {
        self.classes.iter().filter(|c| c.is_enum)
    }
}
