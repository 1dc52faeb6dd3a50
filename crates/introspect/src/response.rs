//! The GraphQL response envelope around an introspection result.

use serde::Deserialize;

use crate::error::{IntrospectionError, Result};
use crate::types::{IntrospectionData, SchemaDescription};

/// A standard GraphQL response: `data` and/or `errors`.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope {
    pub data: Option<IntrospectionData>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQLError {
    #[serde(default)]
    pub message: String,
}

impl ResponseEnvelope {
    /// Unwraps the envelope into the schema description, treating a
    /// non-empty `errors` array or a missing `data` payload as fatal.
    pub fn into_schema(self) -> Result<SchemaDescription> {
        if let Some(errors) = self.errors {
            if !errors.is_empty() {
                let joined = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(IntrospectionError::Introspection(joined));
            }
        }

        match self.data {
            Some(data) => Ok(data.schema),
            None => Err(IntrospectionError::Invalid(
                "response contains neither data nor errors".to_string(),
            )),
        }
    }
}
