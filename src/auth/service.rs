//! # Auth Service
//!
//! Registration and login/logout over an identity store and a session
//! manager. Login never says whether the email or the password was wrong.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use super::errors::{AuthError, AuthResult};
use super::session::{SessionConfig, SessionManager, SessionResolver};
use super::ttl::TtlStore;
use super::user::{User, UserStore};

/// Registration payload
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Identity store + session layer behind one surface
pub struct AuthService<U: UserStore, T: TtlStore> {
    users: Arc<U>,
    sessions: SessionManager<T>,
}

impl<U: UserStore, T: TtlStore> AuthService<U, T> {
    pub fn new(users: Arc<U>, ttl_store: T, config: SessionConfig) -> Self {
        Self {
            users,
            sessions: SessionManager::new(config, ttl_store),
        }
    }

    /// Register a new user
    pub fn register(&self, request: RegisterRequest) -> AuthResult<User> {
        if request.email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        if request.password.is_empty() {
            return Err(AuthError::MissingPassword);
        }
        if self.users.email_exists(&request.email)? {
            return Err(AuthError::EmailAlreadyExists);
        }

        let user = User::new(request.email, &request.password)?;
        self.users.insert(&user)?;
        Ok(user)
    }

    /// Authenticate and open a session
    pub fn login(&self, request: LoginRequest) -> AuthResult<String> {
        let user = self
            .users
            .find_by_email(&request.email)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verify_password(&request.password)? {
            return Err(AuthError::InvalidCredentials);
        }

        self.sessions.issue(user.id)
    }

    /// Resolve a bearer token to an identity
    pub fn resolve(&self, token: &str) -> AuthResult<Option<Uuid>> {
        self.sessions.resolve(token)
    }

    /// Close a session; idempotent
    pub fn logout(&self, token: &str) -> AuthResult<()> {
        self.sessions.revoke(token)
    }

    /// The user behind an id, with the store's visibility rules
    pub fn user(&self, id: Uuid) -> AuthResult<Option<User>> {
        self.users.find_by_id(id)
    }
}

impl<U: UserStore, T: TtlStore> SessionResolver for AuthService<U, T> {
    fn resolve_token(&self, token: &str) -> AuthResult<Option<Uuid>> {
        self.resolve(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ttl::InMemoryTtlStore;
    use crate::auth::user::InMemoryUserStore;

    fn service() -> AuthService<InMemoryUserStore, InMemoryTtlStore> {
        AuthService::new(
            Arc::new(InMemoryUserStore::new()),
            InMemoryTtlStore::new(),
            SessionConfig::default(),
        )
    }

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_requires_email_and_password() {
        let service = service();

        let err = service.register(register_request("", "pw")).unwrap_err();
        assert!(matches!(err, AuthError::MissingEmail));

        let err = service.register(register_request("a@b.c", "")).unwrap_err();
        assert!(matches!(err, AuthError::MissingPassword));
    }

    #[test]
    fn test_register_rejects_duplicate_email() {
        let service = service();

        service.register(register_request("a@b.c", "pw1")).unwrap();
        let err = service
            .register(register_request("a@b.c", "pw2"))
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailAlreadyExists));
    }

    #[test]
    fn test_login_before_registration_fails() {
        let service = service();

        let err = service
            .login(LoginRequest {
                email: "ghost@b.c".to_string(),
                password: "pw".to_string(),
            })
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_login_resolves_to_registered_user() {
        let service = service();
        let user = service.register(register_request("a@b.c", "pw")).unwrap();

        let token = service
            .login(LoginRequest {
                email: "a@b.c".to_string(),
                password: "pw".to_string(),
            })
            .unwrap();

        assert_eq!(service.resolve(&token).unwrap(), Some(user.id));
    }

    #[test]
    fn test_login_with_wrong_password_fails() {
        let service = service();
        service.register(register_request("a@b.c", "pw")).unwrap();

        let err = service
            .login(LoginRequest {
                email: "a@b.c".to_string(),
                password: "nope".to_string(),
            })
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let service = service();
        service.register(register_request("a@b.c", "pw")).unwrap();
        let token = service
            .login(LoginRequest {
                email: "a@b.c".to_string(),
                password: "pw".to_string(),
            })
            .unwrap();

        service.logout(&token).unwrap();
        assert_eq!(service.resolve(&token).unwrap(), None);

        // Second logout of the same token is fine
        service.logout(&token).unwrap();
    }
}
