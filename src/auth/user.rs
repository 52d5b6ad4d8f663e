//! # User Records
//!
//! The persistent identity store. A user is created once at registration
//! and its owner-facing shape never includes the password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::crypto::{hash_password, verify_password};
use super::errors::{AuthError, AuthResult};

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,

    /// Email address (unique across the store)
    pub email: String,

    /// Argon2id hash, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the user registered
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user, hashing the password
    pub fn new(email: String, password: &str) -> AuthResult<Self> {
        let password_hash = hash_password(password)?;

        Ok(Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        })
    }

    /// Verify a password attempt against the stored hash
    pub fn verify_password(&self, password: &str) -> AuthResult<bool> {
        verify_password(password, &self.password_hash)
    }
}

/// Abstract identity store
///
/// Query execution lives with the collaborator that implements this;
/// the core only states what it needs.
pub trait UserStore: Send + Sync {
    /// Find a user by id
    fn find_by_id(&self, id: Uuid) -> AuthResult<Option<User>>;

    /// Find a user by email
    fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Whether an email is already registered
    fn email_exists(&self, email: &str) -> AuthResult<bool>;

    /// Persist a new user
    fn insert(&self, user: &User) -> AuthResult<()>;
}

/// In-memory identity store
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: std::sync::RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_id(&self, id: Uuid) -> AuthResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::Storage("lock poisoned".to_string()))?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::Storage("lock poisoned".to_string()))?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    fn email_exists(&self, email: &str) -> AuthResult<bool> {
        Ok(self.find_by_email(email)?.is_some())
    }

    fn insert(&self, user: &User) -> AuthResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AuthError::Storage("lock poisoned".to_string()))?;
        users.push(user.clone());
        Ok(())
    }
}
