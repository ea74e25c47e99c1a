//! Type creators: reflected classes in, schema type descriptors out.

pub mod enum_creator;

use schema_core::locations::DirectiveLocation;

use crate::errors::SchemaResult;
use crate::introspect::ClassInfo;
use crate::model::Reference;

pub use enum_creator::{EnumCreator, is_enum_constant};

/// Creates one schema type descriptor from a class.
pub trait Creator<T> {
    /// Build the descriptor for `class`. `reference` supplies naming context (type arguments of generic owners).
    ///
    /// ## Errors
    /// Only faults raised by collaborators are returned; they are passed through unchanged.
    fn create(&self, class: &ClassInfo, reference: &Reference) -> SchemaResult<T>;

    /// The directive location of the types this creator builds.
    fn directive_location(&self) -> DirectiveLocation;
}
