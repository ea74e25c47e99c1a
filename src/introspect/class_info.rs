//! Plain-data view of a reflected class and its fields.

use serde::{Deserialize, Serialize};

use super::annotations::Annotations;

/// Discriminates the shape of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Primitive,
    #[default]
    Class,
    Array,
    /// A generic class applied to type arguments (`List<String>`).
    Parameterized,
    /// A type variable (`T`), including self-referential bounds.
    TypeVariable,
}

/// The declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Fully-qualified type name. For arrays, the component type name.
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self { name: name.into(), kind }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn array_of(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Array)
    }
}

/// A declared field of a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub annotations: Annotations,
    /// Declared with the `transient` modifier.
    #[serde(default)]
    pub transient: bool,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Annotations::new(),
            transient: false,
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }
}

/// A reflected class: identity, fields in declaration order, and class-level annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    /// Fully-qualified name; nested classes use `$` (`com.example.Outer$Inner`).
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
    #[serde(default)]
    pub annotations: Annotations,
    /// Declared as an enumeration. Only used to pick candidates from a class index.
    #[serde(default)]
    pub is_enum: bool,
}

impl ClassInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            annotations: Annotations::new(),
            is_enum: false,
        }
    }

    /// Create an enum class whose constants are self-typed fields named `constants`, in order.
    pub fn enumeration<I, S>(name: impl Into<String>, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let fields = constants
            .into_iter()
            .map(|c| FieldInfo::new(c, TypeRef::class(name.clone())))
            .collect();
        Self {
            name,
            fields,
            annotations: Annotations::new(),
            is_enum: true,
        }
    }

    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// The class name without its package, enclosing classes included (`Outer$Inner`).
    pub fn local_name(&self) -> &str {
        self.name.rsplit_once('.').map(|(_, local)| local).unwrap_or(&self.name)
    }

    /// The innermost class name (`Inner` for `com.example.Outer$Inner`).
    pub fn simple_name(&self) -> &str {
        let local = self.local_name();
        local.rsplit_once('$').map(|(_, inner)| inner).unwrap_or(local)
    }
}
