//! # Local Filesystem Blob Store

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::errors::{BlobError, BlobResult};
use super::BlobStore;

/// Environment variable naming the storage root
pub const STORAGE_ROOT_ENV: &str = "FILEDEPOT_STORAGE_ROOT";

/// Fallback storage root
pub const DEFAULT_STORAGE_ROOT: &str = "/tmp/files_manager";

/// Blob store over a local directory
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a store rooted at `root`
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root from `FILEDEPOT_STORAGE_ROOT`, default `/tmp/files_manager`
    pub fn from_env() -> Self {
        let root = std::env::var(STORAGE_ROOT_ENV)
            .unwrap_or_else(|_| DEFAULT_STORAGE_ROOT.to_string());
        Self::new(PathBuf::from(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn write_at(&self, path: &Path, data: &[u8]) -> BlobResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BlobError::Io(e.to_string()))?;
        }

        fs::write(path, data).map_err(|e| BlobError::Io(e.to_string()))
    }
}

impl BlobStore for LocalBlobStore {
    fn store_new(&self, data: &[u8]) -> BlobResult<String> {
        // Uuid filenames make collisions a non-issue and keep rewrites
        // of the same upload distinct.
        let path = self.root.join(Uuid::new_v4().to_string());
        self.write_at(&path, data)?;
        Ok(path.to_string_lossy().into_owned())
    }

    fn write(&self, path: &str, data: &[u8]) -> BlobResult<()> {
        self.write_at(Path::new(path), data)
    }

    fn read(&self, path: &str) -> BlobResult<Vec<u8>> {
        fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlobError::NotFound(path.to_string())
            } else {
                BlobError::Io(e.to_string())
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }
}
