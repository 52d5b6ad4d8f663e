//! filedepot - multi-tenant file storage core
//!
//! Sessions, file/folder uploads, ownership-based visibility, paginated
//! listings, and an asynchronous thumbnail pipeline. The HTTP boundary,
//! the persistent document store's query engine, and the TTL store's
//! network protocol are external collaborators behind traits.

pub mod auth;
pub mod blobs;
pub mod files;
pub mod thumbs;
