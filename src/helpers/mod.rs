//! Collaborators of the type creators.
//!
//! Each concern sits behind a trait so creators can be wired with alternative policies:
//!
//! - [`NamingStrategy`] - public type names ([`TypeNameHelper`])
//! - [`DescriptionResolver`] - descriptions ([`DescriptionHelper`])
//! - [`IgnorePolicy`] - member exclusion ([`IgnoreHelper`])
//! - [`DirectiveRegistry`] - directive types and instances ([`Directives`])
//!
//! [`DeprecatedDirectivesHelper`] is not pluggable: deprecation always maps to the registry's deprecation
//! directive type.

pub mod deprecated;
pub mod description;
pub mod directives;
pub mod ignore;
pub mod type_name;

pub use deprecated::DeprecatedDirectivesHelper;
pub use description::{DescriptionHelper, DescriptionResolver};
pub use directives::{DirectiveRegistry, Directives};
pub use ignore::{IgnoreHelper, IgnorePolicy};
pub use type_name::{AutoNameStrategy, NamingStrategy, TypeNameHelper};
