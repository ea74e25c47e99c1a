//! Output model handed to schema assembly.
//!
//! Every type here is plain, owned data: descriptors are built fresh per creation call and never shared
//! mutably afterwards. All of them serialize with serde (camelCase keys, GraphQL spellings for locations).

pub mod directive;
pub mod enum_type;
pub mod reference;

pub use directive::{DEPRECATED_DIRECTIVE_NAME, DirectiveArgument, DirectiveInstance, DirectiveType};
pub use enum_type::{EnumType, EnumValue};
pub use reference::{Reference, ReferenceType};
