//! The batch scheduler: bounded fan-out with a full completion barrier.
//!
//! A counting semaphore is the admission gate: permits are acquired in
//! input order before each task is spawned, so at most `limit` render
//! tasks ever run at once regardless of batch size. A `JoinSet` is the
//! barrier: `run_batch` drains it to empty before returning, on the
//! success and failure path alike. Tasks are mutually independent; one
//! task's failure (or panic) never cancels or delays another.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Default concurrency ceiling for render tasks.
pub const DEFAULT_RENDER_WORKERS: usize = 4;

/// Outcome counters for one completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Names dispatched (one task each).
    pub total: usize,
    /// Tasks that completed successfully.
    pub rendered: usize,
    /// Tasks that returned an error or panicked.
    pub failed: usize,
}

/// Run `task` once per name, at most `limit` concurrently, and return only
/// after every task has finished.
///
/// Tasks are admitted in input order; completion order is unspecified.
/// Errors are logged and counted, never propagated, so a failing name is
/// simply absent from the output directory afterwards.
pub async fn run_batch<F, Fut, E>(names: Vec<String>, limit: usize, task: F) -> BatchSummary
where
    F: Fn(String) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let total = names.len();
    let gate = Arc::new(Semaphore::new(limit.max(1)));
    let mut tasks = JoinSet::new();

    for name in names {
        // Blocks dispatch until a slot frees; admission order is input order.
        let permit = Arc::clone(&gate)
            .acquire_owned()
            .await
            .expect("render admission gate closed");
        let task = task.clone();
        tasks.spawn(async move {
            let result = task(name.clone()).await;
            drop(permit);
            (name, result)
        });
    }

    let mut rendered = 0;
    let mut failed = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(()))) => rendered += 1,
            Ok((name, Err(error))) => {
                tracing::warn!(guest = %name, %error, "Poster render failed");
                failed += 1;
            }
            Err(join_error) => {
                tracing::error!(%join_error, "Render task panicked");
                failed += 1;
            }
        }
    }

    BatchSummary {
        total,
        rendered,
        failed,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
