//! Batch job model.
//!
//! An upload triggers one background batch. Instead of fire-and-forget,
//! each batch is tracked as a job with a generated id and an explicit
//! status, so clients can poll `/jobs/{id}` rather than inferring
//! completion from the catalog. Job state is in-memory only and does not
//! survive a restart.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Lifecycle status of a batch job.
///
/// `Failed` is reserved for whole-batch aborts (template unreadable, guest
/// list malformed). Per-name render failures are isolated by design and
/// leave the job `Succeeded` with a non-zero `failed` counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl JobStatus {
    /// Whether the job has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// One tracked batch job.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: Uuid,
    pub status: JobStatus,
    /// Number of guests in the batch. Zero until the guest list is parsed.
    pub total: usize,
    /// Posters rendered and written successfully.
    pub rendered: usize,
    /// Render invocations that failed (font, draw, encode, or write).
    pub failed: usize,
    /// Abort reason when `status` is `Failed`.
    pub error: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Create a new pending job with a generated id.
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            status: JobStatus::Pending,
            total: 0,
            rendered: 0,
            failed: 0,
            error: None,
            submitted_at: Utc::now(),
            started_at: None,
            finished_at: None,
        }
    }
}

impl Default for Job {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_job_is_pending_with_zero_counters() {
        let job = Job::new();
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!((job.total, job.rendered, job.failed), (0, 0, 0));
        assert!(job.error.is_none());
        assert!(job.started_at.is_none());
    }

    #[test]
    fn terminal_statuses() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Succeeded.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(Job::new().id, Job::new().id);
    }
}
