//! Background batch entrypoint: load inputs, fan out renders, settle the
//! job.
//!
//! Spawned fire-and-forget from the upload handler; it has no caller to
//! report to, so every outcome lands on the job record (and in the logs).

use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use posterly_core::guest_list::parse_guest_list;
use posterly_core::naming;
use posterly_render::{Template, TextStyle};

use crate::batch::run_batch;
use crate::jobs::JobStore;

/// Everything one batch needs, captured at upload time.
#[derive(Debug, Clone)]
pub struct BatchContext {
    pub template_path: PathBuf,
    pub guest_list_path: PathBuf,
    pub output_dir: PathBuf,
    pub poster_prefix: String,
    pub text_style: TextStyle,
    /// Concurrency ceiling for render tasks.
    pub workers: usize,
}

/// Run one batch to completion and settle its job record.
///
/// A template or guest-list failure aborts the batch before any rendering
/// starts and marks the job failed. Render failures are isolated per name:
/// the batch continues, and the job still succeeds with the failure count
/// on it.
pub async fn process_batch(ctx: BatchContext, store: Arc<JobStore>, job_id: Uuid) {
    let names = match load_guest_list(&ctx).await {
        Ok(names) => names,
        Err(error) => {
            tracing::error!(job_id = %job_id, %error, "Batch aborted");
            store.mark_failed(job_id, error).await;
            return;
        }
    };

    let template = match load_template(&ctx).await {
        Ok(template) => Arc::new(template),
        Err(error) => {
            tracing::error!(job_id = %job_id, %error, "Batch aborted");
            store.mark_failed(job_id, error).await;
            return;
        }
    };

    if let Err(error) = tokio::fs::create_dir_all(&ctx.output_dir).await {
        tracing::error!(job_id = %job_id, %error, "Cannot create output directory");
        store.mark_failed(job_id, error.to_string()).await;
        return;
    }

    store.mark_running(job_id, names.len()).await;
    tracing::info!(job_id = %job_id, guests = names.len(), "Batch started");

    let ctx = Arc::new(ctx);
    let summary = run_batch(names, ctx.workers, move |name| {
        render_one(Arc::clone(&template), Arc::clone(&ctx), name)
    })
    .await;

    tracing::info!(
        job_id = %job_id,
        rendered = summary.rendered,
        failed = summary.failed,
        "Batch finished"
    );
    store
        .mark_succeeded(job_id, summary.rendered, summary.failed)
        .await;
}

/// Render one guest's poster on the blocking pool (decode, draw, and PNG
/// encode are all CPU-bound).
async fn render_one(
    template: Arc<Template>,
    ctx: Arc<BatchContext>,
    name: String,
) -> Result<(), posterly_render::RenderError> {
    let out_path = ctx
        .output_dir
        .join(naming::poster_filename(&ctx.poster_prefix, &name));

    let joined = tokio::task::spawn_blocking(move || {
        posterly_render::render_poster_to_file(&template, &ctx.text_style, &name, &out_path)
    })
    .await;

    match joined {
        Ok(result) => result,
        // Re-raise render panics so the scheduler counts them as failures.
        Err(join_error) => std::panic::resume_unwind(join_error.into_panic()),
    }
}

async fn load_guest_list(ctx: &BatchContext) -> Result<Vec<String>, String> {
    let bytes = tokio::fs::read(&ctx.guest_list_path)
        .await
        .map_err(|e| format!("Cannot read guest list: {e}"))?;
    parse_guest_list(&bytes).map_err(|e| e.to_string())
}

async fn load_template(ctx: &BatchContext) -> Result<Template, String> {
    let path = ctx.template_path.clone();
    tokio::task::spawn_blocking(move || Template::load(path))
        .await
        .map_err(|e| format!("Template decode task failed: {e}"))?
        .map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
