//! Deprecation annotations to `@deprecated` directive instances.

use schema_core::annotations::{AnnotationId, DEPRECATION_KINDS, DEPRECATION_REASON_PARAM};
use schema_core::locations::DirectiveLocation;

use crate::introspect::Annotations;
use crate::model::{DirectiveInstance, DirectiveType};

/// Synthesizes the deprecation directive for members marked deprecated.
///
/// Both the language-native marker and the GraphQL deprecation annotation are recognized. Only the latter can
/// carry a reason, taken from its `reason` parameter (or, failing that, its unnamed value).
#[derive(Debug, Clone, Copy, Default)]
pub struct DeprecatedDirectivesHelper;

impl DeprecatedDirectivesHelper {
    /// Build the deprecation directive instance, if the member is deprecated and a directive type is available.
    ///
    /// ## Returns
    /// - `None` when `directive_type` is `None` or no deprecation annotation is present.
    /// - One instance otherwise, with a `reason` argument only when a non-blank reason was given.
    pub fn transform_deprecated_to_directive(
        &self,
        annotations: &Annotations,
        directive_type: Option<&DirectiveType>,
        location: DirectiveLocation,
    ) -> Option<DirectiveInstance> {
        let directive_type = directive_type?;
        if !annotations.contains_any(DEPRECATION_KINDS) {
            return None;
        }

        let instance = DirectiveInstance::new(directive_type, location);
        match Self::reason(annotations) {
            Some(reason) => Some(instance.with_argument(DEPRECATION_REASON_PARAM, reason)),
            None => Some(instance),
        }
    }

    fn reason(annotations: &Annotations) -> Option<&str> {
        let deprecated = annotations.find(AnnotationId::GraphqlDeprecated)?;
        deprecated
            .param_str(DEPRECATION_REASON_PARAM)
            .or_else(|| deprecated.non_blank_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::AnnotationValue;

    fn transform(annotations: &Annotations) -> Option<DirectiveInstance> {
        DeprecatedDirectivesHelper.transform_deprecated_to_directive(
            annotations,
            Some(&DirectiveType::deprecated()),
            DirectiveLocation::EnumValue,
        )
    }

    #[test]
    fn test_not_deprecated() {
        assert_eq!(transform(&Annotations::new()), None);
    }

    #[test]
    fn test_native_marker_has_no_reason() {
        let annotations = Annotations::new().with_id(AnnotationId::Deprecated, AnnotationValue::marker());
        let instance = transform(&annotations).unwrap();
        assert_eq!(instance.name, "deprecated");
        assert_eq!(instance.location, DirectiveLocation::EnumValue);
        assert!(instance.arguments.is_empty());
    }

    #[test]
    fn test_reason_parameter() {
        let annotations = Annotations::new().with_id(
            AnnotationId::GraphqlDeprecated,
            AnnotationValue::marker().with_param("reason", "use SPADES"),
        );
        let instance = transform(&annotations).unwrap();
        assert_eq!(instance.argument("reason"), Some(&serde_json::json!("use SPADES")));
    }

    #[test]
    fn test_reason_from_unnamed_value() {
        let annotations =
            Annotations::new().with_id(AnnotationId::GraphqlDeprecated, AnnotationValue::of("gone"));
        let instance = transform(&annotations).unwrap();
        assert_eq!(instance.argument("reason"), Some(&serde_json::json!("gone")));
    }

    #[test]
    fn test_both_markers_yield_one_instance_with_reason() {
        let annotations = Annotations::new()
            .with_id(AnnotationId::Deprecated, AnnotationValue::marker())
            .with_id(
                AnnotationId::GraphqlDeprecated,
                AnnotationValue::marker().with_param("reason", "old"),
            );
        let instance = transform(&annotations).unwrap();
        assert_eq!(instance.arguments.len(), 1);
        assert_eq!(instance.argument("reason"), Some(&serde_json::json!("old")));
    }

    #[test]
    fn test_blank_reason_is_dropped() {
        let annotations = Annotations::new().with_id(
            AnnotationId::GraphqlDeprecated,
            AnnotationValue::marker().with_param("reason", "  "),
        );
        assert!(transform(&annotations).unwrap().arguments.is_empty());
    }

    #[test]
    fn test_without_directive_type_nothing_is_emitted() {
        let annotations = Annotations::new().with_id(AnnotationId::Deprecated, AnnotationValue::marker());
        let instance = DeprecatedDirectivesHelper.transform_deprecated_to_directive(
            &annotations,
            None,
            DirectiveLocation::EnumValue,
        );
        assert_eq!(instance, None);
    }
}
