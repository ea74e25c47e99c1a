//! Description lookup.

use schema_core::annotations::DESCRIPTION_KINDS;

use crate::introspect::Annotations;

/// Resolves the description of a schema element from its annotations.
pub trait DescriptionResolver: Send + Sync {
    /// Return the description, or `None` when no description-bearing annotation is present.
    fn describe(&self, annotations: &Annotations) -> Option<String>;
}

/// Default [`DescriptionResolver`]: the first non-blank value among the description annotation kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionHelper;

impl DescriptionResolver for DescriptionHelper {
    fn describe(&self, annotations: &Annotations) -> Option<String> {
        annotations.first_match_of(DESCRIPTION_KINDS).map(str::to_string)
    }
}
