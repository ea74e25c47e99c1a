//! Directive registry: which directive types exist and how annotations become directive instances.

use indexmap::IndexMap;

use schema_core::annotations::{self, DEPRECATION_KINDS};
use schema_core::locations::DirectiveLocation;

use crate::errors::{SchemaError, SchemaResult};
use crate::introspect::annotations::VALUE_PARAM;
use crate::introspect::{AnnotationValue, Annotations};
use crate::model::{DirectiveInstance, DirectiveType};

/// Knows the available directive types and builds directive instances from annotations.
pub trait DirectiveRegistry: Send + Sync {
    /// Build one instance per annotation bound to a directive type, in annotation declaration order.
    ///
    /// ## Errors
    /// - [`SchemaError::DirectiveLocationNotAllowed`] if a directive annotation sits on a location its type does
    ///   not declare.
    fn build_directive_instances(
        &self,
        annotations: &Annotations,
        location: DirectiveLocation,
        reference_name: &str,
    ) -> SchemaResult<Vec<DirectiveInstance>>;

    /// Look up a directive type by the annotation kind that places it.
    fn directive_type(&self, annotation_kind: &str) -> Option<&DirectiveType>;
}

/// Default [`DirectiveRegistry`], indexed by annotation kind.
///
/// ## Notes
/// - Deprecation annotations are never turned into instances here; the deprecation directive is synthesized by
///   [`super::DeprecatedDirectivesHelper`] so that it is attached at most once.
/// - A later registration for the same annotation kind replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct Directives {
    types: IndexMap<String, DirectiveType>,
}

impl Directives {
    pub fn new(types: impl IntoIterator<Item = DirectiveType>) -> Self {
        let mut directives = Self::default();
        for directive_type in types {
            directives.register(directive_type);
        }
        directives
    }

    /// Create a registry from `types`, adding the built-in `deprecated` directive unless one is already bound to
    /// the deprecation annotation.
    pub fn with_builtins(types: impl IntoIterator<Item = DirectiveType>) -> Self {
        let mut directives = Self::new(types);
        let deprecated = DirectiveType::deprecated();
        if !directives.types.contains_key(&deprecated.class_name) {
            directives.register(deprecated);
        }
        directives
    }

    pub fn register(&mut self, directive_type: DirectiveType) {
        self.types.insert(directive_type.class_name.clone(), directive_type);
    }

    /// Iterate over registered directive types in registration order.
    pub fn directive_types(&self) -> impl Iterator<Item = &DirectiveType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn to_directive_instance(
        directive_type: &DirectiveType,
        annotation: &AnnotationValue,
        location: DirectiveLocation,
    ) -> DirectiveInstance {
        let mut instance = DirectiveInstance::new(directive_type, location);
        for argument in &directive_type.arguments {
            let bound = if argument.name == VALUE_PARAM {
                annotation.unnamed().cloned()
            } else {
                annotation.param(&argument.name).cloned()
            };
            if let Some(value) = bound {
                instance.arguments.insert(argument.name.clone(), value);
            }
        }
        instance
    }
}

impl DirectiveRegistry for Directives {
    fn build_directive_instances(
        &self,
        annotations: &Annotations,
        location: DirectiveLocation,
        reference_name: &str,
    ) -> SchemaResult<Vec<DirectiveInstance>> {
        let mut instances = Vec::new();
        for (kind, annotation) in annotations.iter() {
            let Some(directive_type) = self.types.get(kind) else {
                continue;
            };
            if is_deprecation_kind(kind) {
                continue;
            }
            if !directive_type.allows(location) {
                return Err(SchemaError::DirectiveLocationNotAllowed {
                    directive: directive_type.name.clone(),
                    location,
                    reference: reference_name.to_string(),
                    allowed: directive_type.locations_list(),
                });
            }
            instances.push(Self::to_directive_instance(directive_type, annotation, location));
        }
        Ok(instances)
    }

    fn directive_type(&self, annotation_kind: &str) -> Option<&DirectiveType> {
        self.types.get(annotation_kind)
    }
}

fn is_deprecation_kind(kind: &str) -> bool {
    annotations::from_str(kind).is_some_and(|id| DEPRECATION_KINDS.contains(&id))
}
