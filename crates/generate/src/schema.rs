//! Name-indexed view over a schema description.

use std::collections::HashMap;

use opgen_introspect::{NamedTypeRef, ObjectDef, SchemaDescription, TypeDef};

/// A borrowed index over the schema's named types and root operation types.
///
/// Lookups that miss (a field referencing a type the endpoint never
/// described, a root type that is not an object) degrade to `None` rather
/// than failing generation.
#[derive(Debug)]
pub struct SchemaIndex<'a> {
    types: HashMap<&'a str, &'a TypeDef>,
    query_root: Option<&'a ObjectDef>,
    mutation_root: Option<&'a ObjectDef>,
}

impl<'a> SchemaIndex<'a> {
    #[must_use]
    pub fn new(schema: &'a SchemaDescription) -> Self {
        let types: HashMap<&str, &TypeDef> =
            schema.types.iter().map(|t| (t.name(), t)).collect();

        let query_root = root_object(&types, schema.query_type.as_ref());
        let mutation_root = root_object(&types, schema.mutation_type.as_ref());

        Self {
            types,
            query_root,
            mutation_root,
        }
    }

    /// Looks up a named type definition.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'a TypeDef> {
        self.types.get(name).copied()
    }

    /// The object type holding the root query fields, if the schema declares
    /// one.
    #[must_use]
    pub fn query_root(&self) -> Option<&'a ObjectDef> {
        self.query_root
    }

    /// The object type holding the root mutation fields, if the schema
    /// declares one.
    #[must_use]
    pub fn mutation_root(&self) -> Option<&'a ObjectDef> {
        self.mutation_root
    }
}

fn root_object<'a>(
    types: &HashMap<&'a str, &'a TypeDef>,
    root: Option<&NamedTypeRef>,
) -> Option<&'a ObjectDef> {
    match types.get(root?.name.as_str())? {
        TypeDef::Object(obj) => Some(obj),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn indexes_roots_and_types() {
        let schema = testing::schema(
            Some("Query"),
            Some("Mutation"),
            vec![
                testing::object("Query", vec![]),
                testing::object("Mutation", vec![]),
                testing::object("User", vec![]),
            ],
        );
        let index = SchemaIndex::new(&schema);
        assert!(index.query_root().is_some());
        assert!(index.mutation_root().is_some());
        assert!(index.lookup("User").is_some());
        assert!(index.lookup("Ghost").is_none());
    }

    #[test]
    fn missing_or_undescribed_roots_are_none() {
        let schema = testing::schema(Some("Query"), None, vec![]);
        let index = SchemaIndex::new(&schema);
        assert!(index.query_root().is_none());
        assert!(index.mutation_root().is_none());
    }
}
