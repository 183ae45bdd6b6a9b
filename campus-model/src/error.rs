//! Validation errors for request fields and bodies.

use thiserror::Error;

use crate::FieldKind;

/// Result type for field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A caller-supplied value that cannot become part of a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required request field is absent.
    #[error("Required parameter '{0}' is not present")]
    MissingField(String),

    /// A request field does not parse as its declared kind.
    #[error("Failed to convert value '{value}' of parameter '{field}' to {expected}")]
    InvalidField {
        field: String,
        value: String,
        expected: FieldKind,
    },

    /// A JSON request body does not describe a record.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, value: &str, expected: FieldKind) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedBody(err.to_string())
    }
}
