//! Builders for schema descriptions used across the unit tests.

use opgen_introspect::{
    EnumDef, FieldDef, InputValueDef, NamedTypeRef, ObjectDef, ScalarDef, SchemaDescription,
    TypeDef, TypeKind, TypeRef, UnionDef,
};

pub(crate) fn scalar_ref(name: &str) -> TypeRef {
    named_ref(TypeKind::Scalar, name)
}

pub(crate) fn object_ref(name: &str) -> TypeRef {
    named_ref(TypeKind::Object, name)
}

pub(crate) fn union_ref(name: &str) -> TypeRef {
    named_ref(TypeKind::Union, name)
}

pub(crate) fn enum_ref(name: &str) -> TypeRef {
    named_ref(TypeKind::Enum, name)
}

fn named_ref(kind: TypeKind, name: &str) -> TypeRef {
    TypeRef {
        kind,
        name: Some(name.to_string()),
        of_type: None,
    }
}

pub(crate) fn non_null(inner: TypeRef) -> TypeRef {
    TypeRef {
        kind: TypeKind::NonNull,
        name: None,
        of_type: Some(Box::new(inner)),
    }
}

pub(crate) fn list(inner: TypeRef) -> TypeRef {
    TypeRef {
        kind: TypeKind::List,
        name: None,
        of_type: Some(Box::new(inner)),
    }
}

pub(crate) fn field(name: &str, ty: TypeRef) -> FieldDef {
    field_with_args(name, ty, vec![])
}

pub(crate) fn field_with_args(name: &str, ty: TypeRef, args: Vec<InputValueDef>) -> FieldDef {
    FieldDef {
        name: name.to_string(),
        description: None,
        args,
        ty,
        is_deprecated: false,
        deprecation_reason: None,
    }
}

pub(crate) fn arg(name: &str, ty: TypeRef) -> InputValueDef {
    InputValueDef {
        name: name.to_string(),
        description: None,
        ty,
        default_value: None,
    }
}

pub(crate) fn object(name: &str, fields: Vec<FieldDef>) -> TypeDef {
    TypeDef::Object(ObjectDef {
        name: name.to_string(),
        description: None,
        fields,
    })
}

pub(crate) fn union(name: &str, members: &[&str]) -> TypeDef {
    TypeDef::Union(UnionDef {
        name: name.to_string(),
        description: None,
        possible_types: members
            .iter()
            .map(|m| NamedTypeRef {
                name: (*m).to_string(),
            })
            .collect(),
    })
}

pub(crate) fn scalar(name: &str) -> TypeDef {
    TypeDef::Scalar(ScalarDef {
        name: name.to_string(),
        description: None,
    })
}

pub(crate) fn enum_def(name: &str) -> TypeDef {
    TypeDef::Enum(EnumDef {
        name: name.to_string(),
        description: None,
        enum_values: vec![],
    })
}

pub(crate) fn schema(
    query: Option<&str>,
    mutation: Option<&str>,
    types: Vec<TypeDef>,
) -> SchemaDescription {
    SchemaDescription {
        query_type: query.map(|name| NamedTypeRef {
            name: name.to_string(),
        }),
        mutation_type: mutation.map(|name| NamedTypeRef {
            name: name.to_string(),
        }),
        subscription_type: None,
        types,
    }
}
