pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /health                    liveness check
/// POST /upload                    stage template + guest list, spawn batch
/// GET  /guests                    poster catalog (rebuilt per request)
/// GET  /guest_posters/{filename}  stream one generated poster
/// GET  /jobs                      list batch jobs
/// GET  /jobs/{id}                 batch job status
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/upload", post(handlers::upload::upload))
        .route("/guests", get(handlers::guests::list_guests))
        .route(
            "/guest_posters/{filename}",
            get(handlers::posters::get_poster),
        )
        .route("/jobs", get(handlers::jobs::list_jobs))
        .route("/jobs/{id}", get(handlers::jobs::get_job))
}
