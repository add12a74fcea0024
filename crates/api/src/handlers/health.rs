use axum::Json;
use serde_json::{json, Value};

/// GET /health
///
/// Liveness check: reports the crate version. No dependencies to probe --
/// all state is filesystem-resident and checked per request.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
