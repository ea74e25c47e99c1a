//! Public type name resolution.
//!
//! ## Resolution order
//!
//! 1. The type-kind annotation of the reference type (`@Enum("...")` for enums, `@Input("...")` for inputs, ...).
//! 2. `@Name("...")`.
//! 3. The configured [`AutoNameStrategy`] applied to the class name, followed by one `_<name>` suffix per
//!    parametrized type (`Page<Book>` becomes `Page_Book`). Auto-named inputs also get an `Input` suffix.
//!
//! Blank override values are ignored. Explicit names are used verbatim: no suffixes are appended.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use schema_core::annotations::AnnotationId;

use crate::introspect::{Annotations, ClassInfo};
use crate::model::{Reference, ReferenceType};

const INPUT_SUFFIX: &str = "Input";

/// Decides the externally visible name of a type.
///
/// Implementations must be deterministic: identical inputs yield identical names.
pub trait NamingStrategy: Send + Sync {
    fn resolve_name(
        &self,
        class: &ClassInfo,
        annotations: &Annotations,
        reference_type: ReferenceType,
        parametrized_types: Option<&IndexMap<String, Reference>>,
    ) -> String;
}

/// How a name is derived from the class name when no override is annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoNameStrategy {
    /// The innermost class name: `com.example.Outer$Inner` → `Inner`.
    #[default]
    Default,
    /// Enclosing class names concatenated: `com.example.Outer$Inner` → `OuterInner`.
    MergeInnerClass,
    /// The fully-qualified name with separators replaced: `com.example.Outer$Inner` → `com_example_Outer_Inner`.
    Full,
}

impl AutoNameStrategy {
    pub const ALL: &'static [AutoNameStrategy] = &[Self::Default, Self::MergeInnerClass, Self::Full];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::MergeInnerClass => "merge-inner-class",
            Self::Full => "full",
        }
    }

    /// Derive a name from the class name alone.
    pub fn apply(self, class: &ClassInfo) -> String {
        match self {
            Self::Default => class.simple_name().to_string(),
            Self::MergeInnerClass => class.local_name().replace('$', ""),
            Self::Full => class.name.replace(['.', '$'], "_"),
        }
    }
}

impl fmt::Display for AutoNameStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AutoNameStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let expected: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                format!("unknown naming strategy `{s}` (expected one of: {})", expected.join(", "))
            })
    }
}

/// Default [`NamingStrategy`]: annotation overrides first, then the auto-name strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeNameHelper {
    strategy: AutoNameStrategy,
}

impl TypeNameHelper {
    pub fn new(strategy: AutoNameStrategy) -> Self {
        Self { strategy }
    }

    fn explicit_name<'a>(annotations: &'a Annotations, reference_type: ReferenceType) -> Option<&'a str> {
        type_annotation(reference_type)
            .and_then(|id| annotations.value_of(id))
            .or_else(|| annotations.value_of(AnnotationId::Name))
    }
}

impl NamingStrategy for TypeNameHelper {
    fn resolve_name(
        &self,
        class: &ClassInfo,
        annotations: &Annotations,
        reference_type: ReferenceType,
        parametrized_types: Option<&IndexMap<String, Reference>>,
    ) -> String {
        if let Some(name) = Self::explicit_name(annotations, reference_type) {
            return name.to_string();
        }

        let mut name = self.strategy.apply(class);
        for reference in parametrized_types.into_iter().flat_map(IndexMap::values) {
            name.push('_');
            name.push_str(&reference.name);
        }
        if reference_type == ReferenceType::Input && !name.ends_with(INPUT_SUFFIX) {
            name.push_str(INPUT_SUFFIX);
        }
        name
    }
}

/// The annotation that both marks and names a class as a given kind of schema type.
fn type_annotation(reference_type: ReferenceType) -> Option<AnnotationId> {
    match reference_type {
        ReferenceType::Enum => Some(AnnotationId::Enum),
        ReferenceType::Type => Some(AnnotationId::Type),
        ReferenceType::Input => Some(AnnotationId::Input),
        ReferenceType::Interface => Some(AnnotationId::Interface),
        ReferenceType::Union | ReferenceType::Scalar => None,
    }
}
