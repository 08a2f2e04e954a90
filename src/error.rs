//! Error types for the book cache
//!
//! The cache itself never fails; the only failure callers can see is the
//! unpacker's, passed through unchanged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Unpack Error Enum ==
/// Failure to materialize a named book.
#[derive(Error, Debug)]
pub enum UnpackError {
    /// No book exists under this name
    #[error("Book not found: {0}")]
    NotFound(String),

    /// The name cannot address a book (empty, path separators, `.`/`..`)
    #[error("Invalid book name: {0:?}")]
    InvalidName(String),

    /// Storage could not be read
    #[error("Failed to read book '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other unpacker-specific failure
    #[error("Failed to unpack book '{name}': {reason}")]
    Failed { name: String, reason: String },
}

// == IntoResponse Implementation ==
impl IntoResponse for UnpackError {
    fn into_response(self) -> Response {
        let status = match &self {
            UnpackError::NotFound(_) => StatusCode::NOT_FOUND,
            UnpackError::InvalidName(_) => StatusCode::BAD_REQUEST,
            UnpackError::Io { .. } | UnpackError::Failed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for unpacking and cache lookups.
pub type Result<T> = std::result::Result<T, UnpackError>;
