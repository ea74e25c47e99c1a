//! Typed lookup over the annotations attached to a class or field.
//!
//! Annotations are stored as an insertion-ordered map from annotation kind (its fully-qualified name) to
//! its parsed parameters. Order matters: directive instances are built in annotation declaration order.
//!
//! Well-known kinds are queried by [`AnnotationId`] and match any registered spelling (canonical or alias);
//! arbitrary kinds (e.g. user-defined directive annotations) are queried by name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use schema_core::annotations::{self, AnnotationId};

/// Name of the parameter holding an annotation's unnamed value.
pub const VALUE_PARAM: &str = "value";

/// Parameters of one annotation occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationValue {
    /// The single unnamed value (`@Name("x")`, `@JsonIgnore(false)`), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Named parameters (`@Deprecated(reason = "...")`), in declaration order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub params: IndexMap<String, Value>,
}

impl AnnotationValue {
    /// An annotation present without any parameters.
    pub fn marker() -> Self {
        Self::default()
    }

    /// An annotation carrying a single unnamed value.
    pub fn of(value: impl Into<String>) -> Self {
        Self {
            value: Some(Value::String(value.into())),
            params: IndexMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Return a named string parameter, treating blank strings as absent.
    pub fn param_str(&self, name: &str) -> Option<&str> {
        self.param(name)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Return the unnamed value. An explicit `value` parameter stands in for it when absent.
    pub fn unnamed(&self) -> Option<&Value> {
        self.value.as_ref().or_else(|| self.param(VALUE_PARAM))
    }

    /// Return the unnamed value if it is `false` or the string `"false"`.
    pub fn is_false(&self) -> bool {
        match self.unnamed() {
            Some(Value::Bool(flag)) => !flag,
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("false"),
            _ => false,
        }
    }

    /// Return the unnamed value as a string, treating blank strings as absent.
    pub fn non_blank_value(&self) -> Option<&str> {
        self.unnamed()
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// The annotations declared on one class or field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations {
    entries: IndexMap<String, AnnotationValue>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an annotation, keeping declaration order. A repeated kind replaces the earlier value in place.
    pub fn with(mut self, kind: impl Into<String>, value: AnnotationValue) -> Self {
        self.insert(kind, value);
        self
    }

    /// Add a well-known annotation under its canonical spelling.
    pub fn with_id(self, id: AnnotationId, value: AnnotationValue) -> Self {
        self.with(annotations::as_str(id), value)
    }

    pub fn insert(&mut self, kind: impl Into<String>, value: AnnotationValue) {
        self.entries.insert(kind.into(), value);
    }

    /// Look up a well-known annotation under any of its registered spellings.
    pub fn find(&self, id: AnnotationId) -> Option<&AnnotationValue> {
        annotations::info_for(id)
            .spellings()
            .find_map(|spelling| self.entries.get(spelling))
    }

    pub fn has(&self, id: AnnotationId) -> bool {
        self.find(id).is_some()
    }

    /// Return the non-blank unnamed value of a well-known annotation.
    pub fn value_of(&self, id: AnnotationId) -> Option<&str> {
        self.find(id).and_then(AnnotationValue::non_blank_value)
    }

    /// Return the value of the first kind in `ids` that is present with a non-blank value.
    ///
    /// ## Notes
    /// - A kind that is present without a value does not stop the search.
    pub fn first_match_of(&self, ids: &[AnnotationId]) -> Option<&str> {
        ids.iter().find_map(|id| self.value_of(*id))
    }

    /// Return `true` if any kind in `ids` is present, with or without a value.
    pub fn contains_any(&self, ids: &[AnnotationId]) -> bool {
        ids.iter().any(|id| self.has(*id))
    }

    /// Iterate over `(kind, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
