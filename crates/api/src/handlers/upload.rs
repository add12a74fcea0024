//! The upload endpoint: stage the template and guest list, kick off a
//! batch.
//!
//! Staging is single-slot: a new upload overwrites the previous template
//! and guest list. The batch itself runs in the background; the response
//! carries a job id the client can poll instead of waiting.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use posterly_pipeline::{process_batch, BatchContext};
use posterly_render::TextStyle;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Staged filename for the uploaded template image.
const POSTER_FILENAME: &str = "poster.png";

/// Staged filename for the uploaded guest list.
const INVITES_FILENAME: &str = "invites.csv";

/// Acknowledgment body for an accepted upload.
#[derive(Debug, Serialize)]
pub struct UploadAck {
    pub job_id: Uuid,
    pub message: &'static str,
}

/// POST /upload
///
/// Multipart form with fields `poster` (template image) and `invites`
/// (guest list CSV). Both are staged to the upload directory, a pending
/// job is registered, and the batch is spawned fire-and-forget. Responds
/// 202 immediately; outcomes are observable via `/jobs/{id}` and
/// `/guests`.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadAck>>)> {
    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::Internal(format!("Cannot create upload directory: {e}")))?;

    let mut got_poster = false;
    let mut got_invites = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let staged = match field.name() {
            Some("poster") => {
                got_poster = true;
                POSTER_FILENAME
            }
            Some("invites") => {
                got_invites = true;
                INVITES_FILENAME
            }
            // Unknown fields are ignored, not rejected.
            _ => continue,
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        tokio::fs::write(state.config.upload_dir.join(staged), &data)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
    }

    if !got_poster {
        return Err(AppError::BadRequest("Missing poster file".to_string()));
    }
    if !got_invites {
        return Err(AppError::BadRequest(
            "Missing invites list file".to_string(),
        ));
    }

    let job_id = state.jobs.create().await;
    let ctx = batch_context(&state);
    tokio::spawn(process_batch(ctx, Arc::clone(&state.jobs), job_id));

    tracing::info!(job_id = %job_id, "Upload staged, batch spawned");

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: UploadAck {
                job_id,
                message: "Files uploaded and processing in background",
            },
        }),
    ))
}

/// Capture everything the background batch needs from the current config.
fn batch_context(state: &AppState) -> BatchContext {
    let config = &state.config;
    BatchContext {
        template_path: config.upload_dir.join(POSTER_FILENAME),
        guest_list_path: config.upload_dir.join(INVITES_FILENAME),
        output_dir: config.output_dir.clone(),
        poster_prefix: config.poster_prefix.clone(),
        text_style: TextStyle {
            font_path: config.font_path.clone(),
            font_size: config.font_size,
            anchor_y: config.text_anchor_y,
        },
        workers: config.render_workers,
    }
}
