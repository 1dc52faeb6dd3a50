//! The pretty-printer boundary.
//!
//! Formatting delegates to `graphql-parser`: the assembled document is
//! parsed and the AST rendered back, which normalizes indentation. Failures
//! are values — the caller decides whether to retry at a reduced depth or
//! emit the raw text.

use thiserror::Error;

/// Documents beyond this size skip the pretty-printer entirely; callers
/// fall back rather than feeding it input it may not handle.
const MAX_FORMAT_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("document of {0} bytes exceeds the formatter limit")]
    TooLarge(usize),

    #[error("GraphQL syntax error: {0}")]
    Syntax(String),
}

/// Reformats a GraphQL document.
///
/// # Errors
///
/// Returns [`FormatError::TooLarge`] for oversized input and
/// [`FormatError::Syntax`] when the document does not parse.
pub fn format_document(text: &str) -> Result<String, FormatError> {
    format_with_limit(text, MAX_FORMAT_BYTES)
}

fn format_with_limit(text: &str, limit: usize) -> Result<String, FormatError> {
    if text.len() > limit {
        return Err(FormatError::TooLarge(text.len()));
    }
    let document = graphql_parser::parse_query::<&str>(text)
        .map_err(|e| FormatError::Syntax(e.to_string()))?;
    Ok(document.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_indentation() {
        let raw = "query GetUser($id: ID!) {\nuser(id: $id) { id\nname }\n}";
        let formatted = format_document(raw).unwrap();
        assert!(formatted.contains("query GetUser($id: ID!)"));
        assert!(formatted.contains("  user(id: $id)"));
        assert!(formatted.contains("    id"));
    }

    #[test]
    fn rejects_invalid_syntax() {
        let err = format_document("query { unbalanced").unwrap_err();
        assert!(matches!(err, FormatError::Syntax(_)));
    }

    #[test]
    fn rejects_oversized_input() {
        let err = format_with_limit("query { a }", 4).unwrap_err();
        assert!(matches!(err, FormatError::TooLarge(11)));
    }
}
