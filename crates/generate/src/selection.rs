//! Selection-set synthesis.
//!
//! Walks a type's fields (or a union's members) depth-first and builds the
//! selection-set body for one operation. Two mechanisms bound the walk and
//! are always active together: a numeric depth ceiling, and a per-branch
//! visited set that breaks cycles in the type graph. The visited set is
//! copied on descent — each recursive call gets its own copy augmented with
//! the current type — so sibling branches never observe each other's
//! additions. Sharing it would wrongly prune siblings that legitimately
//! select the same type; dropping it would recurse forever through real
//! cycles.

use std::collections::HashSet;

use opgen_introspect::{FieldDef, NamedTypeRef, TypeDef, TypeRef};

use crate::schema::SchemaIndex;

/// Synthesizes the selection-set body for a (possibly wrapped) type
/// reference. Empty output means the caller must omit braces entirely.
pub(crate) fn synthesize_ref(
    index: &SchemaIndex<'_>,
    ty: &TypeRef,
    visited: &HashSet<String>,
    depth: u32,
    ceiling: u32,
) -> String {
    if depth > ceiling {
        return String::new();
    }

    let inner = ty.innermost();
    if inner.kind.is_leaf() {
        return String::new();
    }
    let Some(name) = inner.name.as_deref() else {
        return String::new();
    };

    synthesize_named(index, name, visited, depth, ceiling)
}

/// Synthesizes the selection-set body for a type known by name.
fn synthesize_named(
    index: &SchemaIndex<'_>,
    name: &str,
    visited: &HashSet<String>,
    depth: u32,
    ceiling: u32,
) -> String {
    if depth > ceiling || visited.contains(name) {
        return String::new();
    }
    let Some(def) = index.lookup(name) else {
        // The endpoint referenced a type it never described.
        return String::new();
    };

    let mut visited = visited.clone();
    visited.insert(name.to_string());

    match def {
        TypeDef::Object(obj) => select_fields(index, &obj.fields, &visited, depth, ceiling),
        TypeDef::Interface(iface) => select_fields(index, &iface.fields, &visited, depth, ceiling),
        TypeDef::Union(union) => {
            select_members(index, &union.possible_types, &visited, depth, ceiling)
        }
        // Scalars and enums end selection; input objects and anything
        // unrecognized stop descent rather than failing generation.
        _ => String::new(),
    }
}

fn select_fields(
    index: &SchemaIndex<'_>,
    fields: &[FieldDef],
    visited: &HashSet<String>,
    depth: u32,
    ceiling: u32,
) -> String {
    let mut lines = Vec::new();
    for field in fields {
        if field.ty.innermost().kind.is_leaf() {
            lines.push(field.name.clone());
            continue;
        }
        let sub = synthesize_ref(index, &field.ty, visited, depth + 1, ceiling);
        if !sub.is_empty() {
            lines.push(format!("{} {{ {sub} }}", field.name));
        }
        // A composite field whose entire subtree pruned away contributes
        // nothing: it must not appear with empty braces.
    }
    lines.join("\n")
}

fn select_members(
    index: &SchemaIndex<'_>,
    members: &[NamedTypeRef],
    visited: &HashSet<String>,
    depth: u32,
    ceiling: u32,
) -> String {
    let mut lines = Vec::new();
    for member in members {
        let sub = synthesize_named(index, &member.name, visited, depth + 1, ceiling);
        if !sub.is_empty() {
            lines.push(format!("... on {} {{ {sub} }}", member.name));
        }
    }
    lines.join("\n")
}
