//! Handlers for the `/jobs` resource.
//!
//! Uploads are fire-and-forget, so jobs are the only way for a client to
//! learn whether a batch ran: poll `/jobs/{id}` until the status is
//! terminal, then read the counters.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use posterly_core::job::Job;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /jobs
///
/// List all jobs known to this process, newest first.
pub async fn list_jobs(State(state): State<AppState>) -> Json<DataResponse<Vec<Job>>> {
    Json(DataResponse {
        data: state.jobs.list().await,
    })
}

/// GET /jobs/{id}
///
/// Get a single job by id. 404 for ids from before the last restart --
/// job state is in-memory only.
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> AppResult<Json<DataResponse<Job>>> {
    let job = state
        .jobs
        .get(job_id)
        .await
        .ok_or_else(|| AppError::NotFound {
            entity: "Job",
            name: job_id.to_string(),
        })?;

    Ok(Json(DataResponse { data: job }))
}
