//! # TTL Key-Value Store
//!
//! The ephemeral store behind session tokens. The abstract store expires
//! keys natively; the in-memory stand-in tracks a deadline per entry and
//! treats an expired entry as absent on read.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use super::errors::{AuthError, AuthResult};

/// Abstract key-value store with per-key expiry
pub trait TtlStore: Send + Sync {
    /// Look up a live value; expired and missing keys are identical
    fn get(&self, key: &str) -> AuthResult<Option<String>>;

    /// Store a value for `ttl`, replacing any previous entry
    fn set(&self, key: &str, value: String, ttl: Duration) -> AuthResult<()>;

    /// Delete a key; deleting an absent key is not an error
    fn del(&self, key: &str) -> AuthResult<()>;
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-memory TTL store
#[derive(Debug, Default)]
pub struct InMemoryTtlStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryTtlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop entries whose deadline has passed
    pub fn purge_expired(&self) -> AuthResult<usize> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AuthError::Storage("lock poisoned".to_string()))?;

        let now = Utc::now();
        let before = entries.len();
        entries.retain(|_, e| e.expires_at > now);
        Ok(before - entries.len())
    }
}

impl TtlStore for InMemoryTtlStore {
    fn get(&self, key: &str) -> AuthResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AuthError::Storage("lock poisoned".to_string()))?;

        Ok(entries
            .get(key)
            .filter(|e| e.expires_at > Utc::now())
            .map(|e| e.value.clone()))
    }

    fn set(&self, key: &str, value: String, ttl: Duration) -> AuthResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AuthError::Storage("lock poisoned".to_string()))?;

        entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: Utc::now() + ttl,
            },
        );
        Ok(())
    }

    fn del(&self, key: &str) -> AuthResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AuthError::Storage("lock poisoned".to_string()))?;

        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let store = InMemoryTtlStore::new();

        store
            .set("k", "v".to_string(), Duration::hours(1))
            .unwrap();

        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_expired_key_is_absent() {
        let store = InMemoryTtlStore::new();

        store
            .set("k", "v".to_string(), Duration::seconds(-1))
            .unwrap();

        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_del_is_idempotent() {
        let store = InMemoryTtlStore::new();

        store
            .set("k", "v".to_string(), Duration::hours(1))
            .unwrap();
        store.del("k").unwrap();
        store.del("k").unwrap();

        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_set_replaces() {
        let store = InMemoryTtlStore::new();

        store
            .set("k", "old".to_string(), Duration::hours(1))
            .unwrap();
        store
            .set("k", "new".to_string(), Duration::hours(1))
            .unwrap();

        assert_eq!(store.get("k").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_purge_expired() {
        let store = InMemoryTtlStore::new();

        store
            .set("live", "v".to_string(), Duration::hours(1))
            .unwrap();
        store
            .set("dead", "v".to_string(), Duration::seconds(-1))
            .unwrap();

        assert_eq!(store.purge_expired().unwrap(), 1);
        assert_eq!(store.get("live").unwrap(), Some("v".to_string()));
    }
}
