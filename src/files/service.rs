//! # File Service
//!
//! Orchestrates the session layer, metadata store, blob writer and
//! thumbnail queue. Every dependency is injected and shared via `Arc`;
//! the service itself holds no other state.
//!
//! Identity rules differ by operation: uploads, listings and record
//! reads require a live session; content retrieval accepts anonymous
//! callers and leans entirely on the visibility policy.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::warn;
use uuid::Uuid;

use super::access::{can_read, can_write};
use super::errors::{FileError, FileResult};
use super::pagination::page_bounds;
use super::record::{FileKind, FileRecord, UploadRequest};
use super::store::FileStore;
use crate::auth::{AuthError, SessionResolver};
use crate::blobs::{BlobError, BlobStore};
use crate::thumbs::{JobQueue, ThumbnailJob, THUMBNAIL_WIDTHS};

/// File lifecycle orchestrator
pub struct FileService<R, M, B, Q>
where
    R: SessionResolver,
    M: FileStore,
    B: BlobStore,
    Q: JobQueue,
{
    sessions: Arc<R>,
    meta: Arc<M>,
    blobs: Arc<B>,
    queue: Arc<Q>,
}

impl<R, M, B, Q> FileService<R, M, B, Q>
where
    R: SessionResolver,
    M: FileStore,
    B: BlobStore,
    Q: JobQueue,
{
    pub fn new(sessions: Arc<R>, meta: Arc<M>, blobs: Arc<B>, queue: Arc<Q>) -> Self {
        Self {
            sessions,
            meta,
            blobs,
            queue,
        }
    }

    /// Resolve a token, treating "no identity" as anonymous
    fn identify(&self, token: Option<&str>) -> FileResult<Option<Uuid>> {
        match token {
            Some(token) => self.sessions.resolve_token(token).map_err(auth_failure),
            None => Ok(None),
        }
    }

    /// Resolve a token, failing when no identity comes back
    fn require_caller(&self, token: Option<&str>) -> FileResult<Uuid> {
        self.identify(token)?.ok_or(FileError::Unauthenticated)
    }

    /// Create a file, image or folder record
    pub fn upload(&self, token: Option<&str>, request: UploadRequest) -> FileResult<FileRecord> {
        let caller = self.require_caller(token)?;

        if request.name.is_empty() {
            return Err(FileError::Validation("missing name".to_string()));
        }

        if let Some(parent_id) = request.parent_id {
            let parent = self.meta.get(parent_id)?;
            match parent {
                Some(record) if record.kind == FileKind::Folder => {}
                _ => return Err(FileError::Validation("parent not found".to_string())),
            }
        }

        if request.kind == FileKind::Folder {
            // Data, if any, is ignored for folders; no bytes hit the disk.
            let record = FileRecord::folder(
                caller,
                request.name,
                request.parent_id,
                request.is_public,
            );
            self.meta.insert(&record)?;
            return Ok(record);
        }

        let data = request
            .data
            .as_deref()
            .ok_or_else(|| FileError::Validation("missing data".to_string()))?;
        let bytes = STANDARD
            .decode(data)
            .map_err(|_| FileError::Validation("data is not valid base64".to_string()))?;

        // Blob first, record second: a failed write leaves no record
        // behind, so a visible record always had backing bytes.
        let local_path = self
            .blobs
            .store_new(&bytes)
            .map_err(|e| FileError::Internal(e.to_string()))?;

        let record = FileRecord::with_content(
            caller,
            request.name,
            request.kind,
            request.parent_id,
            request.is_public,
            local_path,
        );
        self.meta.insert(&record)?;

        if record.kind == FileKind::Image {
            // Thumbnails are best-effort; a dead queue must not fail the
            // upload that already committed.
            if let Err(err) = self.queue.enqueue(ThumbnailJob::new(record.id, caller)) {
                warn!(file_id = %record.id, error = %err, "could not enqueue thumbnail job");
            }
        }

        Ok(record)
    }

    /// Fetch a record the caller owns
    ///
    /// Someone else's record and a missing id are the same `NotFound`.
    pub fn get_by_id(&self, token: Option<&str>, id: Uuid) -> FileResult<FileRecord> {
        let caller = self.require_caller(token)?;

        self.meta
            .get_owned(id, caller)?
            .ok_or(FileError::NotFound)
    }

    /// One page of a folder's children, store-native order
    ///
    /// A non-root parent that is missing or not a folder yields an empty
    /// page rather than an error. No owner or visibility filter.
    pub fn list(
        &self,
        token: Option<&str>,
        parent_id: Option<Uuid>,
        page: u64,
    ) -> FileResult<Vec<FileRecord>> {
        self.require_caller(token)?;

        if let Some(parent_id) = parent_id {
            match self.meta.get(parent_id)? {
                Some(record) if record.kind == FileKind::Folder => {}
                _ => return Ok(Vec::new()),
            }
        }

        let (skip, limit) = page_bounds(page);
        self.meta.list_children(parent_id, skip, limit)
    }

    /// Make a record readable by anyone
    pub fn publish(&self, token: Option<&str>, id: Uuid) -> FileResult<FileRecord> {
        self.set_visibility(token, id, true)
    }

    /// Restrict a record to its owner again
    pub fn unpublish(&self, token: Option<&str>, id: Uuid) -> FileResult<FileRecord> {
        self.set_visibility(token, id, false)
    }

    fn set_visibility(
        &self,
        token: Option<&str>,
        id: Uuid,
        is_public: bool,
    ) -> FileResult<FileRecord> {
        let caller = self.require_caller(token)?;

        let record = self.meta.get(id)?.ok_or(FileError::NotFound)?;
        if !can_write(&record, caller) {
            return Err(FileError::NotFound);
        }

        // The write itself is owner-scoped too, so a concurrent transfer
        // of the check cannot widen it; outcome is last-writer-wins.
        self.meta
            .set_visibility(id, caller, is_public)?
            .ok_or(FileError::NotFound)
    }

    /// Raw content of a record, optionally a thumbnail variant
    ///
    /// Anonymous-capable. Denied and missing records answer the same
    /// `NotFound`, as do bytes the pipeline never produced.
    pub fn get_content(
        &self,
        token: Option<&str>,
        id: Uuid,
        size_variant: Option<u32>,
    ) -> FileResult<(FileRecord, Vec<u8>)> {
        let caller = self.identify(token)?;

        let record = self.meta.get(id)?.ok_or(FileError::NotFound)?;
        if !can_read(&record, caller) {
            return Err(FileError::NotFound);
        }

        if record.kind == FileKind::Folder {
            return Err(FileError::Validation("folder has no content".to_string()));
        }

        let base_path = record
            .local_path
            .clone()
            .ok_or_else(|| FileError::Internal("record has no storage path".to_string()))?;

        let path = match size_variant {
            Some(width) if THUMBNAIL_WIDTHS.contains(&width) => {
                crate::thumbs::variant_path(&base_path, width)
            }
            _ => base_path,
        };

        let bytes = self.blobs.read(&path).map_err(|e| match e {
            BlobError::NotFound(_) => FileError::NotFound,
            BlobError::Io(msg) => FileError::Internal(msg),
        })?;

        Ok((record, bytes))
    }
}

fn auth_failure(err: AuthError) -> FileError {
    match err {
        AuthError::Storage(msg) => FileError::Internal(msg),
        other => FileError::Internal(other.to_string()),
    }
}
