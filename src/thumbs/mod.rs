//! # Thumbnail Pipeline
//!
//! Background generation of resized image variants. Producers enqueue a
//! job per uploaded image and move on; a worker drains the queue and
//! writes one variant per configured width next to the original blob.
//! Best-effort end to end: failures are logged, never retried, and never
//! reach the uploading caller.

pub mod job;
pub mod queue;
pub mod worker;

pub use job::ThumbnailJob;
pub use queue::{ChannelQueue, JobQueue, JobReceiver, QueueError};
pub use worker::ThumbnailWorker;

/// Variant widths, largest first
pub const THUMBNAIL_WIDTHS: [u32; 3] = [500, 250, 100];

/// Deterministic path of a width variant
///
/// Deterministic naming is what makes duplicate job delivery safe: a
/// re-run overwrites the same files with the same bytes.
pub fn variant_path(path: &str, width: u32) -> String {
    format!("{}_{}", path, width)
}
