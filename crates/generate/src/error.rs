use thiserror::Error;

use crate::operation::OperationKind;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// A root field with an empty name cannot produce a valid operation
    /// identifier.
    #[error("root {kind} field has an empty name")]
    EmptyRootField { kind: OperationKind },
}
