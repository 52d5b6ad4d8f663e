//! # Auth Errors

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication and registration errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown email or wrong password (generic - never says which)
    #[error("Unauthorized")]
    InvalidCredentials,

    /// Registration without an email
    #[error("Missing email")]
    MissingEmail,

    /// Registration without a password
    #[error("Missing password")]
    MissingPassword,

    /// Email already registered
    #[error("Already exist")]
    EmailAlreadyExists,

    /// Password hashing failed
    #[error("Internal error: password hashing failed")]
    HashingFailed,

    /// Backing store failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AuthError {
    /// HTTP status the boundary layer maps this error to
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 401,
            AuthError::MissingEmail => 400,
            AuthError::MissingPassword => 400,
            AuthError::EmailAlreadyExists => 400,
            AuthError::HashingFailed => 500,
            AuthError::Storage(_) => 500,
        }
    }
}
