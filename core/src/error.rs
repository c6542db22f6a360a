//! Error types for dataset operations.

use arrow::error::ArrowError;
use gffgate_common::error::CommonError;
use thiserror::Error;

/// Errors raised while running an operation or managing a registry.
///
/// The two recoverable gate outcomes (inactive and unknown operation) are not
/// errors; they are reported through [`crate::Outcome`].
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    #[error("Malformed data in {operation}: {message}")]
    MalformedData { operation: String, message: String },

    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error(transparent)]
    Common(#[from] CommonError),
}

impl CoreError {
    /// Create a malformed data error for `operation`.
    pub fn malformed<O: Into<String>, M: Into<String>>(operation: O, message: M) -> Self {
        Self::MalformedData {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Result type for dataset operations
pub type CoreResult<T> = Result<T, CoreError>;
