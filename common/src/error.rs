//! Error handling for the gffgate-common crate.

use thiserror::Error;

/// Error type shared by the configuration and logging layers.
///
/// Each variant carries a human readable message and an optional chained
/// source so callers can report the underlying failure.
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Invalid configuration: {message}")]
    ConfigurationError {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("IO operation failed: {message}")]
    IoError {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Serialization failed: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Deserialization failed: {message}")]
    DeserializationError {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Result type alias for common operations.
pub type Result<T> = std::result::Result<T, CommonError>;

/// Error severity levels for categorizing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The caller can fix the input and try again
    Low,
    /// The current request must be aborted
    High,
    /// Process state is suspect
    Critical,
}

/// Error category for grouping related error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Filesystem access
    Infrastructure,
    /// Encoding and decoding of configuration documents
    DataProcessing,
    /// Configuration and setup errors
    Configuration,
    /// Internal logic errors
    Internal,
}

/// Diagnostic information attached to an error.
pub trait Diagnose {
    /// Get the error severity level.
    fn severity(&self) -> ErrorSeverity;

    /// Get the error category.
    fn category(&self) -> ErrorCategory;

    /// Get suggestions for resolving the error.
    fn suggestions(&self) -> Vec<String>;

    /// Check if the error is retryable.
    fn is_retryable(&self) -> bool;
}

impl CommonError {
    /// Create a configuration error with a custom message.
    pub fn configuration_error<S: Into<String>>(message: S) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with a custom message and source error.
    pub fn configuration_error_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create an IO error with a custom message.
    pub fn io_error<S: Into<String>>(message: S) -> Self {
        Self::IoError {
            message: message.into(),
            source: None,
        }
    }

    /// Create an IO error with a custom message and source error.
    pub fn io_error_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::IoError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a serialization error with a custom message and source error.
    pub fn serialization_error_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a deserialization error with a custom message and source error.
    pub fn deserialization_error_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::DeserializationError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create an internal error with a custom message.
    pub fn internal_error<S: Into<String>>(message: S) -> Self {
        Self::InternalError {
            message: message.into(),
            source: None,
        }
    }

    /// The message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            CommonError::ConfigurationError { message, .. }
            | CommonError::IoError { message, .. }
            | CommonError::SerializationError { message, .. }
            | CommonError::DeserializationError { message, .. }
            | CommonError::InternalError { message, .. } => message,
        }
    }
}

impl Diagnose for CommonError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CommonError::ConfigurationError { .. } => ErrorSeverity::High,
            CommonError::IoError { .. } => ErrorSeverity::Low,
            CommonError::SerializationError { .. } => ErrorSeverity::High,
            CommonError::DeserializationError { .. } => ErrorSeverity::Low,
            CommonError::InternalError { .. } => ErrorSeverity::Critical,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            CommonError::ConfigurationError { .. } => ErrorCategory::Configuration,
            CommonError::IoError { .. } => ErrorCategory::Infrastructure,
            CommonError::SerializationError { .. } => ErrorCategory::DataProcessing,
            CommonError::DeserializationError { .. } => ErrorCategory::DataProcessing,
            CommonError::InternalError { .. } => ErrorCategory::Internal,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            CommonError::ConfigurationError { .. } => vec![
                "Check operation names against the registered operation set".to_string(),
                "Check the logging level (trace, debug, info, warn, error)".to_string(),
            ],
            CommonError::IoError { .. } => {
                vec!["Verify the configuration file path and permissions".to_string()]
            }
            CommonError::DeserializationError { .. } => {
                vec!["Validate the configuration document as JSON".to_string()]
            }
            CommonError::SerializationError { .. } | CommonError::InternalError { .. } => {
                Vec::new()
            }
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, CommonError::IoError { .. })
    }
}
