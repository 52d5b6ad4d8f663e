//! # Thumbnail Jobs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One unit of thumbnail work
///
/// Ephemeral: lives only on the queue, never persisted. Delivery is
/// at-least-once, so processing must tolerate duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailJob {
    /// Record to derive thumbnails for
    pub file_id: Uuid,

    /// Owner the record lookup is scoped to
    pub user_id: Uuid,
}

impl ThumbnailJob {
    pub fn new(file_id: Uuid, user_id: Uuid) -> Self {
        Self { file_id, user_id }
    }

    /// Reject payloads with missing ids before touching any store
    pub fn is_well_formed(&self) -> bool {
        !self.file_id.is_nil() && !self.user_id.is_nil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed() {
        let job = ThumbnailJob::new(Uuid::new_v4(), Uuid::new_v4());
        assert!(job.is_well_formed());

        assert!(!ThumbnailJob::new(Uuid::nil(), Uuid::new_v4()).is_well_formed());
        assert!(!ThumbnailJob::new(Uuid::new_v4(), Uuid::nil()).is_well_formed());
    }

    #[test]
    fn test_serde_roundtrip() {
        let job = ThumbnailJob::new(Uuid::new_v4(), Uuid::new_v4());
        let json = serde_json::to_string(&job).unwrap();
        let back: ThumbnailJob = serde_json::from_str(&json).unwrap();

        assert_eq!(job, back);
    }
}
