//! # Thumbnail Worker
//!
//! Drains the job queue and derives resized variants of image blobs.
//!
//! Failure policy: a malformed job or a vanished record drops the job
//! with a log line and no retry. Per-width generation attempts are
//! independent - one width failing does not stop the others, and the job
//! as a whole never reports failure. Nothing here propagates back to the
//! request that enqueued the job.

use std::io::Cursor;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat};
use thiserror::Error;
use tracing::{debug, error, warn};

use super::job::ThumbnailJob;
use super::queue::JobReceiver;
use super::{variant_path, THUMBNAIL_WIDTHS};
use crate::blobs::{BlobError, BlobStore};
use crate::files::{FileRecord, FileStore};

#[derive(Debug, Error)]
enum VariantError {
    #[error("decode failed: {0}")]
    Decode(String),

    #[error("encode failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Blob(#[from] BlobError),
}

/// Background consumer generating thumbnail variants
pub struct ThumbnailWorker<M: FileStore, B: BlobStore> {
    meta: Arc<M>,
    blobs: Arc<B>,
}

impl<M: FileStore, B: BlobStore> ThumbnailWorker<M, B> {
    pub fn new(meta: Arc<M>, blobs: Arc<B>) -> Self {
        Self { meta, blobs }
    }

    /// Drain the queue until the producer side closes
    pub async fn run(self, mut jobs: JobReceiver) {
        while let Some(job) = jobs.recv().await {
            self.process(&job);
        }
        debug!("thumbnail queue closed, worker exiting");
    }

    /// Handle one job; returns how many variants were written
    ///
    /// Safe under duplicate delivery: variant paths are deterministic and
    /// writes are idempotent overwrites.
    pub fn process(&self, job: &ThumbnailJob) -> usize {
        if !job.is_well_formed() {
            error!(file_id = %job.file_id, user_id = %job.user_id, "dropping malformed thumbnail job");
            return 0;
        }

        // Owner-scoped fetch; a record that was never committed or belongs
        // to someone else aborts the job here.
        let record = match self.meta.get_owned(job.file_id, job.user_id) {
            Ok(Some(record)) => record,
            Ok(None) => {
                warn!(file_id = %job.file_id, "no record for thumbnail job, dropping");
                return 0;
            }
            Err(err) => {
                error!(file_id = %job.file_id, error = %err, "metadata lookup failed, dropping job");
                return 0;
            }
        };

        let (image, format, base_path) = match self.load_source(&record) {
            Ok(loaded) => loaded,
            Err(err) => {
                error!(file_id = %job.file_id, error = %err, "cannot load source image, dropping job");
                return 0;
            }
        };

        let mut written = 0;
        for width in THUMBNAIL_WIDTHS {
            match self.write_variant(&image, format, &base_path, width) {
                Ok(()) => written += 1,
                Err(err) => {
                    // Independent attempt: log and keep going with the
                    // remaining widths.
                    error!(file_id = %job.file_id, width, error = %err, "thumbnail variant failed");
                }
            }
        }

        debug!(file_id = %job.file_id, written, "thumbnail job done");
        written
    }

    fn load_source(
        &self,
        record: &FileRecord,
    ) -> Result<(DynamicImage, ImageFormat, String), VariantError> {
        let path = record
            .local_path
            .clone()
            .ok_or_else(|| VariantError::Decode("record has no stored content".to_string()))?;

        let bytes = self.blobs.read(&path)?;
        let format = image::guess_format(&bytes).unwrap_or(ImageFormat::Png);
        let image = image::load_from_memory(&bytes)
            .map_err(|e| VariantError::Decode(e.to_string()))?;

        Ok((image, format, path))
    }

    fn write_variant(
        &self,
        image: &DynamicImage,
        format: ImageFormat,
        base_path: &str,
        width: u32,
    ) -> Result<(), VariantError> {
        // Aspect-preserving, bounded by width only.
        let resized = image.thumbnail(width, u32::MAX);

        let mut encoded = Cursor::new(Vec::new());
        resized
            .write_to(&mut encoded, format)
            .map_err(|e| VariantError::Encode(e.to_string()))?;

        self.blobs
            .write(&variant_path(base_path, width), encoded.get_ref())?;
        Ok(())
    }
}
