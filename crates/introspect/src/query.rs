//! The standard introspection query document.

use crate::error::Result;
use crate::types::SchemaDescription;
use crate::IntrospectionClient;

/// Standard GraphQL introspection query.
///
/// Fetches the root operation types and every type definition with its
/// fields, arguments, enum values, and possible types. Type references are
/// requested 7 wrapper layers deep, which covers nesting like
/// `[[[String!]!]!]` in practice.
pub const INTROSPECTION_QUERY: &str = r"
query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields {
    ...InputValue
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}

fragment InputValue on __InputValue {
  name
  description
  type {
    ...TypeRef
  }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
";

/// Fetches a schema description from a GraphQL endpoint with default client
/// settings.
///
/// Shorthand for [`IntrospectionClient::new()`](IntrospectionClient) followed
/// by [`execute`](IntrospectionClient::execute); use the client directly when
/// headers, timeouts, or retries need configuring.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a
/// non-success status, the body is not a valid introspection response, or
/// the response carries a GraphQL `errors` array.
pub async fn execute_introspection(url: &str) -> Result<SchemaDescription> {
    IntrospectionClient::new().execute(url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn introspection_query_requests_full_type_information() {
        assert!(INTROSPECTION_QUERY.contains("__schema"));
        assert!(INTROSPECTION_QUERY.contains("queryType { name }"));
        assert!(INTROSPECTION_QUERY.contains("mutationType { name }"));
        assert!(INTROSPECTION_QUERY.contains("possibleTypes"));
        assert!(INTROSPECTION_QUERY.contains("fragment TypeRef on __Type"));
    }
}
