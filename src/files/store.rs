//! # File Metadata Store
//!
//! Abstraction over the persistent document store holding file records.
//! Query execution belongs to the implementing collaborator; the core
//! states the lookups it needs. Mutation is per-record, last-writer-wins.

use std::sync::RwLock;

use uuid::Uuid;

use super::errors::{FileError, FileResult};
use super::record::FileRecord;

/// Abstract metadata store for file records
pub trait FileStore: Send + Sync {
    /// Persist a new record
    fn insert(&self, record: &FileRecord) -> FileResult<()>;

    /// Fetch by id regardless of owner
    fn get(&self, id: Uuid) -> FileResult<Option<FileRecord>>;

    /// Fetch by id, scoped to an owner; other users' records are absent
    fn get_owned(&self, id: Uuid, owner: Uuid) -> FileResult<Option<FileRecord>>;

    /// Set visibility on an owned record, returning the updated record
    ///
    /// `None` when the record is missing or not owned by `owner` - one
    /// store-side operation so the check and the write cannot disagree.
    fn set_visibility(
        &self,
        id: Uuid,
        owner: Uuid,
        is_public: bool,
    ) -> FileResult<Option<FileRecord>>;

    /// Children of a parent (`None` = root) in store-native order
    ///
    /// Native order is whatever the store yields; the in-memory store
    /// yields stable creation order. No owner or visibility filter.
    fn list_children(
        &self,
        parent_id: Option<Uuid>,
        skip: usize,
        limit: usize,
    ) -> FileResult<Vec<FileRecord>>;
}

/// In-memory metadata store
///
/// Backed by an append-ordered vector, so listing order is creation order.
#[derive(Debug, Default)]
pub struct InMemoryFileStore {
    records: RwLock<Vec<FileRecord>>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileStore for InMemoryFileStore {
    fn insert(&self, record: &FileRecord) -> FileResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| FileError::Internal("lock poisoned".to_string()))?;
        records.push(record.clone());
        Ok(())
    }

    fn get(&self, id: Uuid) -> FileResult<Option<FileRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| FileError::Internal("lock poisoned".to_string()))?;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    fn get_owned(&self, id: Uuid, owner: Uuid) -> FileResult<Option<FileRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| FileError::Internal("lock poisoned".to_string()))?;
        Ok(records
            .iter()
            .find(|r| r.id == id && r.user_id == owner)
            .cloned())
    }

    fn set_visibility(
        &self,
        id: Uuid,
        owner: Uuid,
        is_public: bool,
    ) -> FileResult<Option<FileRecord>> {
        let mut records = self
            .records
            .write()
            .map_err(|_| FileError::Internal("lock poisoned".to_string()))?;

        match records
            .iter_mut()
            .find(|r| r.id == id && r.user_id == owner)
        {
            Some(record) => {
                record.is_public = is_public;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    fn list_children(
        &self,
        parent_id: Option<Uuid>,
        skip: usize,
        limit: usize,
    ) -> FileResult<Vec<FileRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| FileError::Internal("lock poisoned".to_string()))?;

        Ok(records
            .iter()
            .filter(|r| r.parent_id == parent_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }
}
