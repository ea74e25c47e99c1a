//! Input model: classes, fields and annotations as plain data.
//!
//! Producing these values from compiled classes is the job of an external indexer; the builder only reads
//! them. They deserialize from the JSON class index accepted by the CLI.

pub mod annotations;
pub mod class_info;
pub mod index;

pub use annotations::{AnnotationValue, Annotations};
pub use class_info::{ClassInfo, FieldInfo, TypeKind, TypeRef};
pub use index::ClassIndex;
