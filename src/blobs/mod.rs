//! # Blob Storage
//!
//! Raw bytes on a local filesystem under a configurable root. The blob
//! layer owns the on-disk bytes; metadata records hold weak references
//! to the paths it hands out.

pub mod errors;
pub mod local;

pub use errors::{BlobError, BlobResult};
pub use local::LocalBlobStore;

/// Abstract blob writer/reader
pub trait BlobStore: Send + Sync {
    /// Write bytes under a freshly assigned unique path and return it
    fn store_new(&self, data: &[u8]) -> BlobResult<String>;

    /// Write bytes at a known path, overwriting any previous content
    fn write(&self, path: &str, data: &[u8]) -> BlobResult<()>;

    /// Read bytes; a missing path is `BlobError::NotFound`
    fn read(&self, path: &str) -> BlobResult<Vec<u8>>;

    /// Whether a path currently has bytes
    fn exists(&self, path: &str) -> bool;
}
