use axum::extract::State;
use axum::Json;

use posterly_pipeline::{catalog, PosterRecord};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /guests
///
/// Rebuild the poster catalog by scanning the output directory and return
/// it as a JSON array. The catalog is derived state: ids are assigned in
/// traversal order and may differ between calls if files changed in
/// between. A scan failure fails this request with a 500, nothing more.
pub async fn list_guests(State(state): State<AppState>) -> AppResult<Json<Vec<PosterRecord>>> {
    let records = catalog::scan(
        &state.config.output_dir,
        &state.config.poster_prefix,
        &state.config.public_base_url,
    )
    .await?;

    Ok(Json(records))
}
