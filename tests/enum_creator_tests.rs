//! Behavior tests for enum creation.
//!
//! Covers value filtering and ordering, directive attachment, deprecation, and determinism.

use std::sync::Arc;

use schema_builder::helpers::{Directives, TypeNameHelper};
use schema_builder::{
    AnnotationValue, Annotations, ClassInfo, Creator, DirectiveType, EnumCreator, EnumType, FieldInfo, Reference,
    ReferenceType, SchemaConfig, TypeRef,
};
use schema_core::annotations::AnnotationId;
use schema_core::locations::DirectiveLocation;
use serde_json::json;

const SUIT: &str = "com.example.Suit";

fn suit() -> ClassInfo {
    ClassInfo::enumeration(SUIT, ["HEARTS", "DIAMONDS", "CLUBS", "SPADES"])
}

fn suit_reference() -> Reference {
    Reference::new(SUIT, "Suit", ReferenceType::Enum)
}

fn plain_creator() -> EnumCreator {
    EnumCreator::from_config(&SchemaConfig::default())
}

fn creator_with_registry() -> EnumCreator {
    plain_creator().with_directives(Arc::new(Directives::with_builtins(Vec::new())))
}

fn create(creator: &EnumCreator, class: &ClassInfo) -> EnumType {
    creator.create(class, &suit_reference()).expect("enum creation failed")
}

fn deprecate(class: &mut ClassInfo, field: &str, annotation: (AnnotationId, AnnotationValue)) {
    let field = class
        .fields
        .iter_mut()
        .find(|f| f.name == field)
        .expect("field missing");
    field.annotations.insert(
        schema_core::annotations::as_str(annotation.0),
        annotation.1,
    );
}

// ============================================================================
// Examples
// ============================================================================

#[test]
fn suit_without_annotations() {
    let enum_type = create(&creator_with_registry(), &suit());

    assert_eq!(enum_type.class_name, SUIT);
    assert_eq!(enum_type.name, "Suit");
    assert_eq!(enum_type.description, None);
    assert!(enum_type.directive_instances.is_empty());
    assert_eq!(enum_type.value_names(), ["HEARTS", "DIAMONDS", "CLUBS", "SPADES"]);
    assert!(enum_type.values.iter().all(|v| v.directive_instances.is_empty()));
    assert!(enum_type.values.iter().all(|v| v.description.is_none()));
}

#[test]
fn suit_with_deprecated_clubs() {
    let mut class = suit();
    deprecate(
        &mut class,
        "CLUBS",
        (
            AnnotationId::GraphqlDeprecated,
            AnnotationValue::marker().with_param("reason", "use SPADES"),
        ),
    );

    let enum_type = create(&creator_with_registry(), &class);

    let clubs = enum_type.value("CLUBS").unwrap();
    assert_eq!(clubs.directive_instances.len(), 1);
    let deprecated = &clubs.directive_instances[0];
    assert_eq!(deprecated.name, "deprecated");
    assert_eq!(deprecated.location, DirectiveLocation::EnumValue);
    assert_eq!(deprecated.argument("reason"), Some(&json!("use SPADES")));

    for other in ["HEARTS", "DIAMONDS", "SPADES"] {
        assert!(enum_type.value(other).unwrap().directive_instances.is_empty());
    }
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn foreign_typed_fields_are_never_values() {
    let class = suit()
        .with_field(FieldInfo::new("label", TypeRef::class("java.lang.String")))
        .with_field(
            FieldInfo::new("next", TypeRef::class("com.example.Rank")).with_annotations(
                Annotations::new().with_id(AnnotationId::Description, AnnotationValue::of("not a constant")),
            ),
        );

    let enum_type = create(&plain_creator(), &class);
    assert_eq!(enum_type.values.len(), 4);
    assert!(enum_type.value("label").is_none());
    assert!(enum_type.value("next").is_none());
}

#[test]
fn self_typed_arrays_are_excluded() {
    let class = ClassInfo::new(SUIT)
        .with_field(FieldInfo::new("$VALUES", TypeRef::array_of(SUIT)))
        .with_field(FieldInfo::new("HEARTS", TypeRef::class(SUIT)));

    let enum_type = create(&plain_creator(), &class);
    assert_eq!(enum_type.value_names(), ["HEARTS"]);
}

#[test]
fn ignored_fields_are_excluded() {
    let mut class = suit();
    class.fields[1].annotations = Annotations::new().with_id(AnnotationId::Ignore, AnnotationValue::marker());
    class.fields[3] = class.fields[3].clone().transient();

    let enum_type = create(&plain_creator(), &class);
    assert_eq!(enum_type.value_names(), ["HEARTS", "CLUBS"]);
}

#[test]
fn value_order_follows_declaration_order() {
    let class = ClassInfo::enumeration(SUIT, ["SPADES", "HEARTS", "CLUBS", "DIAMONDS"]);
    let enum_type = create(&plain_creator(), &class);
    assert_eq!(enum_type.value_names(), ["SPADES", "HEARTS", "CLUBS", "DIAMONDS"]);
}

// ============================================================================
// Directives
// ============================================================================

#[test]
fn without_registry_directives_are_empty() {
    let mut class = suit().with_annotations(Annotations::new().with("com.example.Key", AnnotationValue::of("id")));
    deprecate(&mut class, "HEARTS", (AnnotationId::Deprecated, AnnotationValue::marker()));

    let creator = plain_creator();
    assert!(!creator.has_directives());
    let enum_type = create(&creator, &class);
    assert!(enum_type.directive_instances.is_empty());
    assert!(enum_type.values.iter().all(|v| v.directive_instances.is_empty()));
}

#[test]
fn deprecation_without_reason_has_no_argument() {
    let mut class = suit();
    deprecate(&mut class, "DIAMONDS", (AnnotationId::Deprecated, AnnotationValue::marker()));

    let enum_type = create(&creator_with_registry(), &class);
    let diamonds = enum_type.value("DIAMONDS").unwrap();
    assert_eq!(diamonds.directive_instances.len(), 1);
    assert!(diamonds.directive_instances[0].arguments.is_empty());
}

#[test]
fn deprecation_dropped_when_registry_lacks_deprecated_type() {
    let mut class = suit();
    deprecate(&mut class, "DIAMONDS", (AnnotationId::Deprecated, AnnotationValue::marker()));

    let creator = plain_creator().with_directives(Arc::new(Directives::new(Vec::new())));
    let enum_type = create(&creator, &class);
    assert!(enum_type.value("DIAMONDS").unwrap().directive_instances.is_empty());
}

#[test]
fn deprecated_directive_attached_once_even_when_registered() {
    // The deprecation annotation is itself bound to the registered `deprecated` type.
    let mut class = suit();
    deprecate(
        &mut class,
        "HEARTS",
        (
            AnnotationId::GraphqlDeprecated,
            AnnotationValue::marker().with_param("reason", "old"),
        ),
    );
    deprecate(&mut class, "HEARTS", (AnnotationId::Deprecated, AnnotationValue::marker()));

    let enum_type = create(&creator_with_registry(), &class);
    assert_eq!(enum_type.value("HEARTS").unwrap().directive_instances.len(), 1);
}

#[test]
fn type_and_value_directives_from_registry() {
    let registry = Directives::with_builtins([
        DirectiveType::new("key", "com.example.Key").with_location(DirectiveLocation::Enum),
        DirectiveType::new("auth", "com.example.Auth")
            .with_location(DirectiveLocation::EnumValue)
            .with_argument(schema_builder::model::DirectiveArgument::new("roles")),
    ]);
    let mut class = suit().with_annotations(Annotations::new().with("com.example.Key", AnnotationValue::marker()));
    class.fields[2].annotations = Annotations::new()
        .with("com.example.Auth", AnnotationValue::marker().with_param("roles", json!(["dealer"])))
        .with_id(AnnotationId::Deprecated, AnnotationValue::marker());

    let creator = plain_creator().with_directives(Arc::new(registry));
    let enum_type = create(&creator, &class);

    assert_eq!(enum_type.directive_instances.len(), 1);
    assert_eq!(enum_type.directive_instances[0].name, "key");
    assert_eq!(enum_type.directive_instances[0].location, DirectiveLocation::Enum);

    let clubs = enum_type.value("CLUBS").unwrap();
    let names: Vec<&str> = clubs.directive_instances.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["auth", "deprecated"]);
    assert_eq!(clubs.directive_instances[0].argument("roles"), Some(&json!(["dealer"])));
}

// ============================================================================
// Naming and determinism
// ============================================================================

#[test]
fn enum_annotation_overrides_name() {
    let class = suit().with_annotations(Annotations::new().with_id(AnnotationId::Enum, AnnotationValue::of("CardSuit")));
    assert_eq!(create(&plain_creator(), &class).name, "CardSuit");
}

#[test]
fn parametrized_reference_context_is_used_for_naming() {
    let reference = suit_reference().with_parametrized_type(
        "T",
        Reference::new("com.example.Deck", "Deck", ReferenceType::Type),
    );
    let enum_type = plain_creator().create(&suit(), &reference).unwrap();
    assert_eq!(enum_type.name, "Suit_Deck");
}

#[test]
fn creation_is_deterministic() {
    let mut class = suit();
    deprecate(&mut class, "CLUBS", (AnnotationId::Deprecated, AnnotationValue::marker()));
    let creator = creator_with_registry();

    let first = create(&creator, &class);
    let second = create(&creator, &class);
    assert_eq!(first, second);
}

#[test]
fn concurrent_creation_matches_sequential() {
    let creator = Arc::new(
        EnumCreator::new(Arc::new(TypeNameHelper::default()))
            .with_directives(Arc::new(Directives::with_builtins(Vec::new()))),
    );
    let mut class = suit();
    deprecate(&mut class, "SPADES", (AnnotationId::Deprecated, AnnotationValue::marker()));
    let expected = create(&creator, &class);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let creator = Arc::clone(&creator);
                let class = &class;
                scope.spawn(move || creator.create(class, &suit_reference()).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
