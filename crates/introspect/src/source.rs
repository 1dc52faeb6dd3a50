//! Loading a pre-fetched introspection result from disk.

use std::path::Path;

use crate::error::{IntrospectionError, Result};
use crate::types::{IntrospectionData, SchemaDescription};

/// Reads a schema description from a JSON file.
///
/// Accepts either a raw introspection result (`{"__schema": ...}`) or a full
/// GraphQL response wrapping it under a `data` key. A document carrying a
/// non-empty `errors` array is rejected the same way a live response would
/// be.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the JSON cannot be decoded,
/// or the document carries GraphQL errors.
pub fn load_schema_file(path: &Path) -> Result<SchemaDescription> {
    let text = std::fs::read_to_string(path)?;
    parse_schema_json(&text)
}

/// Decodes introspection JSON, unwrapping an optional `data` envelope.
pub fn parse_schema_json(text: &str) -> Result<SchemaDescription> {
    let mut value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| IntrospectionError::Parse(e.to_string()))?;

    if let Some(errors) = value.get("errors").and_then(|e| e.as_array()) {
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(|e| {
                    e.get("message")
                        .and_then(|m| m.as_str())
                        .unwrap_or("unknown error")
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Err(IntrospectionError::Introspection(joined));
        }
    }

    let payload = if value.get("data").is_some() {
        value["data"].take()
    } else {
        value
    };

    let data: IntrospectionData = serde_json::from_value(payload)
        .map_err(|e| IntrospectionError::Parse(e.to_string()))?;
    Ok(data.schema)
}
