//! GraphQL schema introspection for operation generation.
//!
//! This crate fetches a schema description from a remote endpoint via the
//! standard introspection query, or loads a pre-fetched introspection JSON
//! document from disk, and exposes the decoded type system as read-only
//! serde types.
//!
//! # Examples
//!
//! ## Fetch from an endpoint
//!
//! ```no_run
//! use opgen_introspect::execute_introspection;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let schema = execute_introspection("https://api.example.com/graphql").await?;
//!     println!("Schema has {} types", schema.types.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Load from a file
//!
//! ```no_run
//! use opgen_introspect::load_schema_file;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = load_schema_file(Path::new("schema.json"))?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod query;
mod response;
mod source;
mod types;

pub use client::IntrospectionClient;
pub use error::{IntrospectionError, Result};
pub use query::{execute_introspection, INTROSPECTION_QUERY};
pub use source::{load_schema_file, parse_schema_json};
pub use types::*;
