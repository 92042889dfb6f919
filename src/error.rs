//! Error types for question generation.

use thiserror::Error;

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while configuring or running the generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The configured ranges cannot produce a valid question.
    #[error("Invalid generator configuration: {0}")]
    Configuration(String),

    /// An operation name that does not map to one of the four operations.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl GeneratorError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        GeneratorError::Configuration(message.into())
    }
}
