//! Schema description types decoded from an introspection response.
//!
//! These are read-only views over whatever the endpoint (or a pre-fetched
//! JSON document) reported. Fields that some servers omit or null out are
//! defaulted so that an unusual response degrades instead of failing the
//! whole run.

use serde::{Deserialize, Serialize};

/// The `data` payload of an introspection response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: SchemaDescription,
}

/// The type system reported by the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDescription {
    pub query_type: Option<NamedTypeRef>,
    pub mutation_type: Option<NamedTypeRef>,
    pub subscription_type: Option<NamedTypeRef>,
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

/// A reference to a type by name only, as used for root types and union
/// members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedTypeRef {
    pub name: String,
}

/// One named type definition, discriminated by its introspection `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeDef {
    #[serde(rename = "SCALAR")]
    Scalar(ScalarDef),
    #[serde(rename = "OBJECT")]
    Object(ObjectDef),
    #[serde(rename = "INTERFACE")]
    Interface(InterfaceDef),
    #[serde(rename = "UNION")]
    Union(UnionDef),
    #[serde(rename = "ENUM")]
    Enum(EnumDef),
    #[serde(rename = "INPUT_OBJECT")]
    InputObject(InputObjectDef),
}

impl TypeDef {
    /// The type's name, whatever its kind.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Scalar(t) => &t.name,
            TypeDef::Object(t) => &t.name,
            TypeDef::Interface(t) => &t.name,
            TypeDef::Union(t) => &t.name,
            TypeDef::Enum(t) => &t.name,
            TypeDef::InputObject(t) => &t.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalarDef {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDef {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDef {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub possible_types: Vec<NamedTypeRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionDef {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub possible_types: Vec<NamedTypeRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub enum_values: Vec<EnumValueDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectDef {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub input_fields: Vec<InputValueDef>,
}

/// A field declared on an object or interface type, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub args: Vec<InputValueDef>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// A field argument or input-object field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValueDef {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueDef {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// A possibly wrapped type reference: a named type reachable through zero or
/// more `List` / `NonNull` layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<TypeRef>>,
}

/// Introspection type kinds. Anything a future spec revision adds decodes as
/// [`TypeKind::Unknown`] and is treated as "stop descending" by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
    #[serde(other)]
    Unknown,
}

impl TypeKind {
    /// Whether a type of this kind always terminates a selection set.
    #[must_use]
    pub fn is_leaf(self) -> bool {
        matches!(self, TypeKind::Scalar | TypeKind::Enum)
    }

    /// Whether this kind is a `List` / `NonNull` wrapper rather than a named
    /// type.
    #[must_use]
    pub fn is_wrapper(self) -> bool {
        matches!(self, TypeKind::List | TypeKind::NonNull)
    }
}

impl TypeRef {
    /// Strips all `List` / `NonNull` wrapper layers, in any nesting order,
    /// and returns the innermost named type reference.
    ///
    /// Wrapper nesting is finite by construction of any real schema, so this
    /// terminates in O(wrapper depth). A malformed reference whose wrapper
    /// chain ends without a named type yields the last reference seen.
    #[must_use]
    pub fn innermost(&self) -> &TypeRef {
        let mut current = self;
        while current.kind.is_wrapper() {
            match current.of_type.as_deref() {
                Some(inner) => current = inner,
                None => break,
            }
        }
        current
    }

    /// Renders the reference in schema notation, e.g. `ID!`, `[String]`,
    /// `[[Foo!]!]`.
    #[must_use]
    pub fn to_type_string(&self) -> String {
        match self.kind {
            TypeKind::NonNull => match self.of_type.as_deref() {
                Some(inner) => format!("{}!", inner.to_type_string()),
                None => String::from("!"),
            },
            TypeKind::List => match self.of_type.as_deref() {
                Some(inner) => format!("[{}]", inner.to_type_string()),
                None => String::from("[]"),
            },
            _ => self.name.clone().unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_type_string())
    }
}
