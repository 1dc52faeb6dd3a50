//! Operation synthesis from a GraphQL schema description.
//!
//! Given an introspected type system, this crate generates a document with
//! one query (or mutation) operation per root field, selecting nested
//! sub-fields up to a bounded depth. Cyclic type graphs are handled by a
//! per-branch visited set carried through the recursive walk; a numeric
//! depth ceiling bounds descent independently.
//!
//! # Examples
//!
//! ```no_run
//! use opgen_generate::{generate_document, DepthLimit, GenerateOptions};
//! use opgen_introspect::load_schema_file;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = load_schema_file(Path::new("schema.json"))?;
//! let output = generate_document(
//!     &schema,
//!     GenerateOptions {
//!         depth: DepthLimit::from_flag(3),
//!         format: true,
//!     },
//! )?;
//! println!("{}", output.text);
//! # Ok(())
//! # }
//! ```

mod depth;
mod document;
mod error;
mod format;
mod operation;
mod schema;
mod selection;
#[cfg(test)]
mod testing;

pub use depth::{DepthLimit, DEFAULT_DEPTH};
pub use document::{generate_document, DocumentOutput, GenerateOptions};
pub use error::{GenerateError, Result};
pub use format::{format_document, FormatError};
pub use operation::{build_operation, OperationKind};
pub use schema::SchemaIndex;
