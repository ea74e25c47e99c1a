//! Enum type creation.
//!
//! An enum class declares its constants as fields typed with the class itself. Those fields, minus arrays and
//! ignored members, become the enum values, in declaration order.

use std::sync::Arc;

use schema_core::annotations::{self, AnnotationId, DESCRIPTION_KINDS};
use schema_core::locations::DirectiveLocation;

use super::Creator;
use crate::config::SchemaConfig;
use crate::errors::SchemaResult;
use crate::helpers::{
    DeprecatedDirectivesHelper, DescriptionHelper, DescriptionResolver, DirectiveRegistry, IgnoreHelper, IgnorePolicy,
    NamingStrategy, TypeNameHelper,
};
use crate::introspect::{Annotations, ClassInfo, FieldInfo, TypeKind};
use crate::model::{DirectiveInstance, EnumType, EnumValue, Reference, ReferenceType};

/// Return `true` if `field` declares an enum constant of `class`: typed with the class itself, and not an array.
pub fn is_enum_constant(class: &ClassInfo, field: &FieldInfo) -> bool {
    field.ty.name == class.name && field.ty.kind != TypeKind::Array
}

/// Creates [`EnumType`]s.
///
/// The directive registry is optional. Without one, every directive list is empty and deprecation is dropped
/// silently. Install it with [`EnumCreator::with_directives`] or, before the creator is shared,
/// [`EnumCreator::set_directives`].
pub struct EnumCreator {
    naming: Arc<dyn NamingStrategy>,
    descriptions: Arc<dyn DescriptionResolver>,
    ignore: Arc<dyn IgnorePolicy>,
    directives: Option<Arc<dyn DirectiveRegistry>>,
    deprecated_helper: DeprecatedDirectivesHelper,
}

impl EnumCreator {
    /// Create a creator with the given naming strategy and the default description and ignore policies.
    pub fn new(naming: Arc<dyn NamingStrategy>) -> Self {
        Self {
            naming,
            descriptions: Arc::new(DescriptionHelper),
            ignore: Arc::new(IgnoreHelper),
            directives: None,
            deprecated_helper: DeprecatedDirectivesHelper,
        }
    }

    /// Create a creator with the default collaborators for `config`. No directive registry is installed.
    pub fn from_config(config: &SchemaConfig) -> Self {
        Self::new(Arc::new(TypeNameHelper::new(config.auto_name_strategy)))
    }

    pub fn with_description_resolver(mut self, descriptions: Arc<dyn DescriptionResolver>) -> Self {
        self.descriptions = descriptions;
        self
    }

    pub fn with_ignore_policy(mut self, ignore: Arc<dyn IgnorePolicy>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_directives(mut self, directives: Arc<dyn DirectiveRegistry>) -> Self {
        self.directives = Some(directives);
        self
    }

    /// Install the directive registry after construction.
    ///
    /// Takes `&mut self`: once the creator is shared for concurrent `create` calls it can no longer be reassigned.
    pub fn set_directives(&mut self, directives: Arc<dyn DirectiveRegistry>) {
        self.directives = Some(directives);
    }

    pub fn has_directives(&self) -> bool {
        self.directives.is_some()
    }

    fn directive_instances(
        &self,
        annotations: &Annotations,
        reference_name: &str,
        location: DirectiveLocation,
    ) -> SchemaResult<Vec<DirectiveInstance>> {
        match &self.directives {
            Some(directives) => directives.build_directive_instances(annotations, location, reference_name),
            None => Ok(Vec::new()),
        }
    }

    fn add_directive_for_deprecated(&self, annotations: &Annotations, enum_value: &mut EnumValue) {
        let Some(directives) = &self.directives else {
            return;
        };
        let directive_type = directives.directive_type(annotations::as_str(AnnotationId::GraphqlDeprecated));
        if let Some(deprecated) =
            self.deprecated_helper
                .transform_deprecated_to_directive(annotations, directive_type, DirectiveLocation::EnumValue)
        {
            tracing::debug!(value = %enum_value.value, directive = ?deprecated, "adding deprecated directive");
            enum_value.add_directive_instance(deprecated);
        }
    }
}

impl Creator<EnumType> for EnumCreator {
    #[tracing::instrument(skip_all, fields(class = %class.name))]
    fn create(&self, class: &ClassInfo, reference: &Reference) -> SchemaResult<EnumType> {
        tracing::debug!("creating enum");

        let annotations = &class.annotations;

        let name = self.naming.resolve_name(
            class,
            annotations,
            ReferenceType::Enum,
            reference.class_parametrized_types(),
        );
        let description = self.descriptions.describe(annotations);

        let mut enum_type = EnumType::new(class.name.clone(), name, description);
        enum_type.directive_instances =
            self.directive_instances(annotations, &enum_type.class_name, self.directive_location())?;

        for field in class.fields.iter().filter(|f| is_enum_constant(class, f)) {
            let field_annotations = &field.annotations;
            if self.ignore.should_ignore(field_annotations, field) {
                continue;
            }

            let description = field_annotations.first_match_of(DESCRIPTION_KINDS).map(str::to_string);
            let directive_instances =
                self.directive_instances(field_annotations, &field.name, DirectiveLocation::EnumValue)?;
            let mut enum_value = EnumValue::new(description, field.name.clone(), directive_instances);
            self.add_directive_for_deprecated(field_annotations, &mut enum_value);
            enum_type.add_value(enum_value);
        }

        tracing::debug!(name = %enum_type.name, values = enum_type.values.len(), "created enum");
        Ok(enum_type)
    }

    fn directive_location(&self) -> DirectiveLocation {
        DirectiveLocation::Enum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::Directives;
    use crate::introspect::{AnnotationValue, TypeRef};
    use crate::model::{DirectiveArgument, DirectiveType};

    const SUIT: &str = "com.example.Suit";

    fn creator() -> EnumCreator {
        EnumCreator::from_config(&SchemaConfig::default())
    }

    fn reference() -> Reference {
        Reference::new(SUIT, "Suit", ReferenceType::Enum)
    }

    #[test]
    fn test_is_enum_constant() {
        let class = ClassInfo::new(SUIT);
        assert!(is_enum_constant(&class, &FieldInfo::new("HEARTS", TypeRef::class(SUIT))));
        assert!(!is_enum_constant(&class, &FieldInfo::new("VALUES", TypeRef::array_of(SUIT))));
        assert!(!is_enum_constant(&class, &FieldInfo::new("label", TypeRef::class("java.lang.String"))));
    }

    #[test]
    fn test_directive_location_is_enum() {
        assert_eq!(creator().directive_location(), DirectiveLocation::Enum);
    }

    #[test]
    fn test_description_on_type_and_value() {
        let mut class = ClassInfo::enumeration(SUIT, ["HEARTS"]).with_annotations(
            Annotations::new().with_id(AnnotationId::Description, AnnotationValue::of("Card suits")),
        );
        class.fields[0].annotations =
            Annotations::new().with_id(AnnotationId::Description, AnnotationValue::of("Red"));

        let enum_type = creator().create(&class, &reference()).unwrap();
        assert_eq!(enum_type.description.as_deref(), Some("Card suits"));
        assert_eq!(enum_type.values[0].description.as_deref(), Some("Red"));
    }

    #[test]
    fn test_set_directives_enables_type_level_directives() {
        let class = ClassInfo::enumeration(SUIT, ["HEARTS"])
            .with_annotations(Annotations::new().with("com.example.Key", AnnotationValue::of("id")));
        let registry = Directives::new([DirectiveType::new("key", "com.example.Key")
            .with_location(DirectiveLocation::Enum)
            .with_argument(DirectiveArgument::new("value"))]);

        let mut creator = creator();
        assert!(creator.create(&class, &reference()).unwrap().directive_instances.is_empty());

        creator.set_directives(Arc::new(registry));
        assert!(creator.has_directives());
        let enum_type = creator.create(&class, &reference()).unwrap();
        assert_eq!(enum_type.directive_instances.len(), 1);
        assert_eq!(enum_type.directive_instances[0].location, DirectiveLocation::Enum);
    }

    #[test]
    fn test_registry_fault_propagates() {
        let class = ClassInfo::enumeration(SUIT, ["HEARTS"])
            .with_annotations(Annotations::new().with("com.example.Auth", AnnotationValue::marker()));
        let registry = Directives::new([
            DirectiveType::new("auth", "com.example.Auth").with_location(DirectiveLocation::EnumValue)
        ]);
        let creator = creator().with_directives(Arc::new(registry));
        assert!(creator.create(&class, &reference()).is_err());
    }

    struct IgnoreAll;

    impl IgnorePolicy for IgnoreAll {
        fn should_ignore(&self, _: &Annotations, _: &FieldInfo) -> bool {
            true
        }
    }

    #[test]
    fn test_custom_ignore_policy() {
        let class = ClassInfo::enumeration(SUIT, ["HEARTS", "SPADES"]);
        let creator = creator().with_ignore_policy(Arc::new(IgnoreAll));
        let enum_type = creator.create(&class, &reference()).unwrap();
        assert!(!enum_type.has_values());
    }

    struct FixedDescription;

    impl DescriptionResolver for FixedDescription {
        fn describe(&self, _: &Annotations) -> Option<String> {
            Some("Playing card suit".to_string())
        }
    }

    #[test]
    fn test_custom_description_resolver_sets_type_description() {
        let mut class = ClassInfo::enumeration(SUIT, ["HEARTS"]).with_annotations(
            Annotations::new().with_id(AnnotationId::Description, AnnotationValue::of("Card suits")),
        );
        class.fields[0].annotations =
            Annotations::new().with_id(AnnotationId::Description, AnnotationValue::of("Red"));

        let creator = creator().with_description_resolver(Arc::new(FixedDescription));
        let enum_type = creator.create(&class, &reference()).unwrap();
        assert_eq!(enum_type.description.as_deref(), Some("Playing card suit"));
        // Value descriptions are read from the annotations directly.
        assert_eq!(enum_type.values[0].description.as_deref(), Some("Red"));
    }
}
