//! Member exclusion policy.

use schema_core::annotations::AnnotationId;

use crate::introspect::{Annotations, FieldInfo};

/// Decides whether an otherwise qualifying member is left out of the schema.
pub trait IgnorePolicy: Send + Sync {
    fn should_ignore(&self, annotations: &Annotations, field: &FieldInfo) -> bool;
}

/// Default [`IgnorePolicy`].
///
/// A field is ignored when it:
/// - carries `@Ignore` or `@JsonbTransient`,
/// - carries `@JsonIgnore` without an explicit `false` value, or
/// - is declared `transient`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreHelper;

impl IgnorePolicy for IgnoreHelper {
    fn should_ignore(&self, annotations: &Annotations, field: &FieldInfo) -> bool {
        if annotations.has(AnnotationId::Ignore) || annotations.has(AnnotationId::JsonbTransient) {
            return true;
        }
        // `@JsonIgnore(false)` switches the exclusion off
        if annotations.find(AnnotationId::JsonIgnore).is_some_and(|a| !a.is_false()) {
            return true;
        }
        field.transient
    }
}
