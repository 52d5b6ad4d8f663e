//! # File Service Errors
//!
//! The four failure kinds the boundary layer maps to status codes. A
//! record that exists but is not accessible reports the same `NotFound`
//! as one that never existed.

use thiserror::Error;

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

/// File lifecycle and retrieval errors
#[derive(Debug, Clone, Error)]
pub enum FileError {
    /// No session, or the token no longer resolves
    #[error("Unauthorized")]
    Unauthenticated,

    /// Malformed input: missing field, bad parent, folder content request
    #[error("{0}")]
    Validation(String),

    /// Missing record, inaccessible record, or missing bytes on disk
    #[error("Not found")]
    NotFound,

    /// Store or filesystem failure attributed to the operation
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FileError {
    /// HTTP status the boundary layer maps this error to
    pub fn status_code(&self) -> u16 {
        match self {
            FileError::Unauthenticated => 401,
            FileError::Validation(_) => 400,
            FileError::NotFound => 404,
            FileError::Internal(_) => 500,
        }
    }
}
