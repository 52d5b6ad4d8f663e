//! # File Records and Lifecycle
//!
//! Metadata records for files and folders, the ownership/visibility policy,
//! deterministic pagination, and the orchestrating service that ties the
//! metadata store, blob writer and thumbnail queue together.

pub mod access;
pub mod errors;
pub mod pagination;
pub mod record;
pub mod service;
pub mod store;

pub use access::{can_read, can_write};
pub use errors::{FileError, FileResult};
pub use pagination::{page_bounds, parse_page, PAGE_SIZE};
pub use record::{FileKind, FileRecord, UploadRequest};
pub use service::FileService;
pub use store::{FileStore, InMemoryFileStore};
