//! Building one operation definition per root field.

use std::collections::HashSet;
use std::fmt;

use opgen_introspect::FieldDef;

use crate::depth::DepthLimit;
use crate::error::{GenerateError, Result};
use crate::schema::SchemaIndex;
use crate::selection;

/// The kind of root operation a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    fn keyword(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }

    fn name_prefix(self) -> &'static str {
        match self {
            OperationKind::Query => "Get",
            OperationKind::Mutation => "Mutate",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Builds one fully formed operation definition for a root field.
///
/// The operation name is the capitalized field name prefixed with `Get` for
/// queries and `Mutate` for mutations. Each field argument becomes a
/// variable declaration (`$arg: Type!`) and a usage (`arg: $arg`), in the
/// field's declared order. A field returning a scalar or enum (or whose
/// whole selection prunes away) renders as a bare call without braces.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyRootField`] when the field name is empty:
/// failing fast beats silently emitting a malformed identifier.
pub fn build_operation(
    index: &SchemaIndex<'_>,
    kind: OperationKind,
    field: &FieldDef,
    limit: DepthLimit,
) -> Result<String> {
    let mut chars = field.name.chars();
    let Some(first) = chars.next() else {
        return Err(GenerateError::EmptyRootField { kind });
    };
    let name = format!(
        "{}{}{}",
        kind.name_prefix(),
        first.to_uppercase(),
        chars.as_str()
    );

    let (var_defs, args_usage) = if field.args.is_empty() {
        (String::new(), String::new())
    } else {
        let vars = field
            .args
            .iter()
            .map(|arg| format!("${}: {}", arg.name, arg.ty))
            .collect::<Vec<_>>()
            .join(", ");
        let usages = field
            .args
            .iter()
            .map(|arg| format!("{0}: ${0}", arg.name))
            .collect::<Vec<_>>()
            .join(", ");
        (format!("({vars})"), format!("({usages})"))
    };

    // The root selection itself is depth 0; its body starts at depth 1.
    let body = selection::synthesize_ref(index, &field.ty, &HashSet::new(), 1, limit.ceiling());

    let operation = if body.is_empty() {
        format!(
            "{} {name}{var_defs} {{\n{}{args_usage}\n}}",
            kind.keyword(),
            field.name
        )
    } else {
        format!(
            "{} {name}{var_defs} {{\n{}{args_usage} {{\n{body}\n}}\n}}",
            kind.keyword(),
            field.name
        )
    };
    Ok(operation)
}
