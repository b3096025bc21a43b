//! Core error types for ALGOSCOPE.

use std::fmt;

/// Core result type
pub type CoreResult<T> = Result<T, CoreError>;

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Unknown algorithm id
    UnknownAlgorithm {
        /// The id that failed to resolve
        id: String,
    },

    /// Parse error
    ParseError {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Why it failed
        reason: String,
    },

    /// Not found
    NotFound {
        /// Entity kind
        kind: String,
        /// Entity id
        id: String,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm { id } => write!(f, "Unknown algorithm: {id}"),
            Self::ParseError { message } => write!(f, "Parse error: {message}"),
            Self::Validation { field, reason } => {
                write!(f, "Validation failed for {field}: {reason}")
            }
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
        }
    }
}

impl std::error::Error for CoreError {}
