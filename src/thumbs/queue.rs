//! # Job Queue
//!
//! The seam between the file service (producer) and the thumbnail worker
//! (consumer). Constructed once at process start and injected into both
//! sides - never ambient state. No ordering guarantee between jobs.

use thiserror::Error;
use tokio::sync::mpsc;

use super::job::ThumbnailJob;

/// Queue errors
#[derive(Debug, Clone, Error)]
pub enum QueueError {
    /// Consumer side is gone; the job will never run
    #[error("job queue closed")]
    Closed,
}

/// Abstract producer half of the job queue
pub trait JobQueue: Send + Sync {
    /// Hand a job to the pipeline without waiting for it to run
    fn enqueue(&self, job: ThumbnailJob) -> Result<(), QueueError>;
}

/// Consumer half handed to the worker at process start
pub type JobReceiver = mpsc::UnboundedReceiver<ThumbnailJob>;

/// In-process queue over an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelQueue {
    tx: mpsc::UnboundedSender<ThumbnailJob>,
}

impl ChannelQueue {
    /// Create the queue, returning the producer and the consumer end
    pub fn new() -> (Self, JobReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl JobQueue for ChannelQueue {
    fn enqueue(&self, job: ThumbnailJob) -> Result<(), QueueError> {
        self.tx.send(job).map_err(|_| QueueError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_enqueue_delivers() {
        let (queue, mut rx) = ChannelQueue::new();
        let job = ThumbnailJob::new(Uuid::new_v4(), Uuid::new_v4());

        queue.enqueue(job.clone()).unwrap();

        assert_eq!(rx.recv().await, Some(job));
    }

    #[tokio::test]
    async fn test_enqueue_preserves_duplicates() {
        let (queue, mut rx) = ChannelQueue::new();
        let job = ThumbnailJob::new(Uuid::new_v4(), Uuid::new_v4());

        queue.enqueue(job.clone()).unwrap();
        queue.enqueue(job.clone()).unwrap();

        assert_eq!(rx.recv().await, Some(job.clone()));
        assert_eq!(rx.recv().await, Some(job));
    }

    #[tokio::test]
    async fn test_enqueue_after_consumer_drop_fails() {
        let (queue, rx) = ChannelQueue::new();
        drop(rx);

        let err = queue
            .enqueue(ThumbnailJob::new(Uuid::new_v4(), Uuid::new_v4()))
            .unwrap_err();

        assert!(matches!(err, QueueError::Closed));
    }
}
