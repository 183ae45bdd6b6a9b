//! Error types for endpoint sets and their wire form.

use campus_model::{Resource, ValidationError};
use campus_storage::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Operation, Role};

/// Result type for endpoint-set operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Everything an endpoint-set call can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller lacks the role the operation requires.
    #[error("Access is denied")]
    AccessDenied { operation: Operation, required: Role },

    /// A lookup by key found nothing.
    #[error("{entity} with id {id} not found")]
    EntityNotFound { entity: &'static str, id: String },

    /// A request field or body is malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record store failed.
    #[error(transparent)]
    Store(#[from] StorageError),
}

impl ApiError {
    /// Not-found error for a key of resource `R`.
    pub fn not_found<R: Resource>(key: &R::Key) -> Self {
        Self::EntityNotFound {
            entity: R::name(),
            id: key.to_string(),
        }
    }

    /// The `type` reported in the error body.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::AccessDenied { .. } => "AccessDeniedException",
            Self::EntityNotFound { .. } => "EntityNotFoundException",
            Self::Validation(_) => "ValidationException",
            Self::Store(_) => "StoreFailure",
        }
    }

    /// HTTP status the boundary should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::AccessDenied { .. } => 403,
            Self::EntityNotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Store(_) => 500,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            kind: self.type_name().to_string(),
            message: self.to_string(),
        }
    }
}

/// JSON body of every error response: `{"type": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

/// JSON body carrying a single confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
