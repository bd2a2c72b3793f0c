//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised when a value fails domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Unknown field '{field}'")]
    UnknownField { field: String },

    #[error("Field '{field}' expects a {expected} value")]
    WrongKind {
        field: String,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown field validation error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        ValidationError::UnknownField {
            field: field.into(),
        }
    }

    /// Creates a wrong kind validation error.
    pub fn wrong_kind(field: impl Into<String>, expected: &'static str) -> Self {
        ValidationError::WrongKind {
            field: field.into(),
            expected,
        }
    }
}
