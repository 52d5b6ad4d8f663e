//! # Session Manager
//!
//! Issues, resolves and revokes opaque bearer tokens over a TTL store.
//!
//! ## Invariants
//! - A token resolves until it is revoked or its TTL elapses, whichever
//!   comes first. Resolution never extends the deadline.
//! - Absent, expired and revoked tokens are indistinguishable to callers.
//! - The raw token is returned exactly once; the store only sees its digest.

use chrono::Duration;
use uuid::Uuid;

use super::crypto::{generate_token, token_key};
use super::errors::{AuthError, AuthResult};
use super::ttl::TtlStore;

/// Session layer configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Token lifetime
    pub token_ttl: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::hours(24),
        }
    }
}

/// Session manager over an injected TTL store
pub struct SessionManager<T: TtlStore> {
    config: SessionConfig,
    store: T,
}

impl<T: TtlStore> SessionManager<T> {
    pub fn new(config: SessionConfig, store: T) -> Self {
        Self { config, store }
    }

    /// Open a session for a user and return the raw token
    ///
    /// Multiple concurrent sessions per user are allowed; each token is
    /// its own store entry.
    pub fn issue(&self, user_id: Uuid) -> AuthResult<String> {
        let token = generate_token();
        self.store.set(
            &token_key(&token),
            user_id.to_string(),
            self.config.token_ttl,
        )?;
        Ok(token)
    }

    /// Resolve a token to a user id
    ///
    /// `None` covers unknown, expired and revoked tokens alike; callers
    /// treat all three as "no identity".
    pub fn resolve(&self, token: &str) -> AuthResult<Option<Uuid>> {
        let value = match self.store.get(&token_key(token))? {
            Some(v) => v,
            None => return Ok(None),
        };

        let user_id = Uuid::parse_str(&value)
            .map_err(|_| AuthError::Storage("malformed session entry".to_string()))?;
        Ok(Some(user_id))
    }

    /// Close a session; closing an already-closed session is not an error
    pub fn revoke(&self, token: &str) -> AuthResult<()> {
        self.store.del(&token_key(token))
    }
}

/// Seam between the file service and the session layer
pub trait SessionResolver: Send + Sync {
    /// Turn a bearer token into an identity, if the session is live
    fn resolve_token(&self, token: &str) -> AuthResult<Option<Uuid>>;
}

impl<T: TtlStore> SessionResolver for SessionManager<T> {
    fn resolve_token(&self, token: &str) -> AuthResult<Option<Uuid>> {
        self.resolve(token)
    }
}
