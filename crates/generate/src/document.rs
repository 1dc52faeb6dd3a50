//! Document assembly: one operation per root field, then formatting.

use opgen_introspect::SchemaDescription;

use crate::depth::{DepthLimit, DEFAULT_DEPTH};
use crate::error::Result;
use crate::format;
use crate::operation::{build_operation, OperationKind};
use crate::schema::SchemaIndex;

/// Depth used for the one regeneration attempt after a formatter failure.
const FALLBACK_DEPTH: u32 = DEFAULT_DEPTH;

/// Settings for a generation run.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    pub depth: DepthLimit,
    /// Whether to run the pretty-printer over the assembled document.
    pub format: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            depth: DepthLimit::default(),
            format: true,
        }
    }
}

/// The generated document plus what happened on the way to it.
#[derive(Debug)]
pub struct DocumentOutput {
    pub text: String,
    /// Number of operations in the document.
    pub operations: usize,
    /// Whether the pretty-printer ran successfully.
    pub formatted: bool,
    /// Set when a formatter failure forced regeneration at
    /// [`FALLBACK_DEPTH`].
    pub reduced_depth: bool,
}

/// Generates one operation per root query field, then per root mutation
/// field, in declaration order, separated by blank lines.
///
/// When formatting fails the run recovers instead of aborting: the document
/// is regenerated once at a fixed safe depth and formatting retried; if that
/// also fails, the raw unformatted text of the first attempt is returned.
///
/// # Errors
///
/// Returns an error only for schema shapes that cannot produce a valid
/// document at all, such as a root field with an empty name.
#[tracing::instrument(skip(schema), fields(types = schema.types.len()))]
pub fn generate_document(
    schema: &SchemaDescription,
    options: GenerateOptions,
) -> Result<DocumentOutput> {
    let index = SchemaIndex::new(schema);
    let (raw, operations) = assemble(&index, options.depth)?;
    tracing::debug!(operations, bytes = raw.len(), "Document assembled");

    if !options.format || raw.trim().is_empty() {
        return Ok(DocumentOutput {
            text: raw,
            operations,
            formatted: false,
            reduced_depth: false,
        });
    }

    match format::format_document(&raw) {
        Ok(text) => Ok(DocumentOutput {
            text,
            operations,
            formatted: true,
            reduced_depth: false,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Formatting failed");
            if options.depth.ceiling() != FALLBACK_DEPTH {
                tracing::warn!(depth = FALLBACK_DEPTH, "Regenerating at reduced depth");
                let (reduced, operations) =
                    assemble(&index, DepthLimit::Bounded(FALLBACK_DEPTH))?;
                if let Ok(text) = format::format_document(&reduced) {
                    return Ok(DocumentOutput {
                        text,
                        operations,
                        formatted: true,
                        reduced_depth: true,
                    });
                }
            }
            tracing::warn!("Emitting raw unformatted document");
            Ok(DocumentOutput {
                text: raw,
                operations,
                formatted: false,
                reduced_depth: false,
            })
        }
    }
}

fn assemble(index: &SchemaIndex<'_>, depth: DepthLimit) -> Result<(String, usize)> {
    let mut buffer = String::new();
    let mut operations = 0;

    let roots = [
        (OperationKind::Query, index.query_root()),
        (OperationKind::Mutation, index.mutation_root()),
    ];
    for (kind, root) in roots {
        let Some(root) = root else { continue };
        for field in &root.fields {
            let operation = build_operation(index, kind, field, depth)?;
            buffer.push_str(&operation);
            buffer.push_str("\n\n");
            operations += 1;
        }
    }

    Ok((buffer, operations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        arg, field, field_with_args, list, non_null, object, object_ref, scalar, scalar_ref,
        schema,
    };

    /// The schema from the end-to-end scenario:
    /// `Query { user(id: ID!): User }`,
    /// `User { id: ID!, name: String, friends: [User] }`.
    fn user_schema() -> opgen_introspect::SchemaDescription {
        schema(
            Some("Query"),
            None,
            vec![
                object(
                    "Query",
                    vec![field_with_args(
                        "user",
                        object_ref("User"),
                        vec![arg("id", non_null(scalar_ref("ID")))],
                    )],
                ),
                object(
                    "User",
                    vec![
                        field("id", non_null(scalar_ref("ID"))),
                        field("name", scalar_ref("String")),
                        field("friends", list(object_ref("User"))),
                    ],
                ),
                scalar("ID"),
                scalar("String"),
            ],
        )
    }

    #[test]
    fn end_to_end_user_scenario_at_depth_two() {
        let s = user_schema();
        let options = GenerateOptions {
            depth: DepthLimit::Bounded(2),
            format: false,
        };
        let out = generate_document(&s, options).unwrap();

        assert_eq!(out.operations, 1);
        assert!(out.text.contains("query GetUser($id: ID!)"));
        assert!(out.text.contains("user(id: $id)"));
        assert!(out.text.contains("id\nname"));
        // `friends` re-enters User on the same path, so cycle detection
        // prunes its whole subtree and the field is omitted.
        assert!(!out.text.contains("friends"));
    }

    #[test]
    fn formatted_output_parses_and_indents() {
        let s = user_schema();
        let out = generate_document(&s, GenerateOptions::default()).unwrap();
        assert!(out.formatted);
        assert!(!out.reduced_depth);
        assert!(out.text.contains("query GetUser($id: ID!)"));
        assert!(out.text.contains("  user(id: $id)"));
    }

    #[test]
    fn generation_is_idempotent() {
        let s = user_schema();
        let options = GenerateOptions {
            depth: DepthLimit::Bounded(3),
            format: false,
        };
        let first = generate_document(&s, options).unwrap();
        let second = generate_document(&s, options).unwrap();
        assert_eq!(first.text, second.text);
    }

    #[test]
    fn queries_precede_mutations_separated_by_blank_lines() {
        let s = schema(
            Some("Query"),
            Some("Mutation"),
            vec![
                object("Query", vec![field("ping", scalar_ref("String"))]),
                object("Mutation", vec![field("reset", scalar_ref("Boolean"))]),
                scalar("String"),
                scalar("Boolean"),
            ],
        );
        let out = generate_document(
            &s,
            GenerateOptions {
                depth: DepthLimit::default(),
                format: false,
            },
        )
        .unwrap();

        assert_eq!(out.operations, 2);
        let query_pos = out.text.find("query GetPing").unwrap();
        let mutation_pos = out.text.find("mutation MutateReset").unwrap();
        assert!(query_pos < mutation_pos);
        assert!(out.text.contains("}\n\nmutation"));
    }

    #[test]
    fn unformattable_document_falls_back_to_raw_text() {
        // A root field whose name the formatter cannot parse. At the default
        // depth there is no reduced-depth attempt to make, so the raw text of
        // the first pass comes back as-is.
        let s = schema(
            Some("Query"),
            None,
            vec![
                object("Query", vec![field("bad name", scalar_ref("String"))]),
                scalar("String"),
            ],
        );
        let out = generate_document(&s, GenerateOptions::default()).unwrap();

        assert!(!out.formatted);
        assert!(!out.reduced_depth);
        assert_eq!(out.operations, 1);
        assert!(out.text.contains("bad name"));

        let raw = generate_document(
            &s,
            GenerateOptions {
                depth: DepthLimit::default(),
                format: false,
            },
        )
        .unwrap();
        assert_eq!(out.text, raw.text);
    }

    #[test]
    fn formatter_failure_regenerates_at_reduced_depth() {
        // A numeric field name is a syntax error inside a selection set. It
        // sits nine levels down: reachable when only cycle detection bounds
        // the walk, pruned once the document is regenerated at the fixed
        // fallback depth.
        let mut types = vec![object("Query", vec![field("root", object_ref("C1"))])];
        for i in 1..=8u32 {
            let mut fields = vec![field("ok", scalar_ref("String"))];
            if i < 8 {
                fields.push(field("next", object_ref(&format!("C{}", i + 1))));
            } else {
                fields.push(field("404", scalar_ref("String")));
            }
            types.push(object(&format!("C{i}"), fields));
        }
        types.push(scalar("String"));
        let s = schema(Some("Query"), None, types);

        let out = generate_document(
            &s,
            GenerateOptions {
                depth: DepthLimit::Auto,
                format: true,
            },
        )
        .unwrap();

        assert!(out.reduced_depth);
        assert!(out.formatted);
        assert!(!out.text.contains("404"));
        assert!(out.text.contains("ok"));
    }

    #[test]
    fn schema_without_roots_yields_empty_document() {
        let s = schema(None, None, vec![scalar("ID")]);
        let out = generate_document(&s, GenerateOptions::default()).unwrap();
        assert_eq!(out.operations, 0);
        assert!(out.text.is_empty());
        assert!(!out.formatted);
    }
}
