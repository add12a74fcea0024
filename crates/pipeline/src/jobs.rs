//! In-memory job status table.
//!
//! Keyed by the generated job id handed back from the upload endpoint.
//! State is process-local and not persisted: a restart forgets all jobs
//! (the posters themselves remain on disk and are rediscovered by the
//! catalog scan).

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use posterly_core::job::{Job, JobStatus};

/// Shared job table. Cheap to share via `Arc`; all mutation goes through
/// the async `RwLock`.
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: RwLock<HashMap<Uuid, Job>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pending job and return its id.
    pub async fn create(&self) -> Uuid {
        let job = Job::new();
        let id = job.id;
        self.jobs.write().await.insert(id, job);
        id
    }

    /// Mark a job running with the parsed guest count.
    pub async fn mark_running(&self, id: Uuid, total: usize) {
        self.update(id, |job| {
            job.status = JobStatus::Running;
            job.total = total;
            job.started_at = Some(Utc::now());
        })
        .await;
    }

    /// Record the outcome counters and mark the job succeeded.
    ///
    /// A job with render failures still succeeds: per-name failures are
    /// isolated and only surface through the `failed` counter.
    pub async fn mark_succeeded(&self, id: Uuid, rendered: usize, failed: usize) {
        self.update(id, |job| {
            job.status = JobStatus::Succeeded;
            job.rendered = rendered;
            job.failed = failed;
            job.finished_at = Some(Utc::now());
        })
        .await;
    }

    /// Mark a job failed with an abort reason (template or guest-list
    /// failure before any rendering started).
    pub async fn mark_failed(&self, id: Uuid, error: String) {
        self.update(id, |job| {
            job.status = JobStatus::Failed;
            job.error = Some(error);
            job.finished_at = Some(Utc::now());
        })
        .await;
    }

    pub async fn get(&self, id: Uuid) -> Option<Job> {
        self.jobs.read().await.get(&id).cloned()
    }

    /// All jobs, newest first.
    pub async fn list(&self) -> Vec<Job> {
        let mut jobs: Vec<Job> = self.jobs.read().await.values().cloned().collect();
        jobs.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        jobs
    }

    async fn update(&self, id: Uuid, apply: impl FnOnce(&mut Job)) {
        let mut jobs = self.jobs.write().await;
        match jobs.get_mut(&id) {
            Some(job) => apply(job),
            None => tracing::error!(job_id = %id, "Update for unknown job"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
