use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use tokio_util::io::ReaderStream;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /guest_posters/{filename}
///
/// Streams one generated poster from the output directory. Only the final
/// path component of the request is used, so traversal outside the output
/// directory is not possible. 404 if the file does not exist.
pub async fn get_poster(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    let file_name = std::path::Path::new(&filename)
        .file_name()
        .ok_or_else(|| AppError::BadRequest("Invalid poster filename".to_string()))?;
    let path = state.config.output_dir.join(file_name);

    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound {
                entity: "Poster",
                name: filename,
            });
        }
        Err(e) => return Err(AppError::Internal(e.to_string())),
    };

    let metadata = file
        .metadata()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if metadata.is_dir() {
        return Err(AppError::NotFound {
            entity: "Poster",
            name: filename,
        });
    }

    let stream = ReaderStream::new(file);
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .header(header::CONTENT_LENGTH, metadata.len().to_string())
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::Internal(e.to_string()))
}
