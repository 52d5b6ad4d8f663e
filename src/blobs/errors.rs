//! # Blob Errors

use thiserror::Error;

/// Result type for blob operations
pub type BlobResult<T> = Result<T, BlobError>;

/// Blob storage errors
#[derive(Debug, Clone, Error)]
pub enum BlobError {
    /// No bytes at the given path
    #[error("blob not found: {0}")]
    NotFound(String),

    /// Underlying filesystem failure
    #[error("I/O error: {0}")]
    Io(String),
}
