//! Shared helpers for API integration tests.
//!
//! Builds the application router through the same [`build_app_router`]
//! the production binary uses, so tests exercise the full middleware
//! stack (CORS, request ID, timeout, tracing, panic recovery).

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use posterly_api::config::ServerConfig;
use posterly_api::router::build_app_router;
use posterly_api::state::AppState;
use posterly_pipeline::JobStore;

/// Build a test `ServerConfig` rooted in the given scratch directory.
pub fn test_config(root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        upload_dir: root.join("uploads"),
        output_dir: root.join("guest_posters"),
        // Deliberately absent so render units fail font load in tests.
        font_path: root.join("missing-font.ttf"),
        font_size: 70.0,
        text_anchor_y: 64.0,
        poster_prefix: "Virginia & Alfred wedding invitation".to_string(),
        public_base_url: "http://localhost:8080".to_string(),
        render_workers: 4,
        max_upload_bytes: 10 * 1024 * 1024,
        request_timeout_secs: 30,
    }
}

/// Build the full application router for a config.
pub fn build_test_app(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        jobs: Arc::new(JobStore::new()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("valid JSON body")
}

/// Encode a small solid PNG for use as an uploaded template.
pub fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(64, 64, image::Rgba([0, 0, 0, 255]));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("png encode");
    buf.into_inner()
}

/// Multipart boundary used by [`multipart_request`].
pub const BOUNDARY: &str = "posterly-test-boundary";

/// Build a multipart/form-data POST request from `(field, filename, data)`
/// parts.
pub fn multipart_request(uri: &str, parts: &[(&str, &str, &[u8])]) -> Request<Body> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request")
}

/// Poll `/jobs/{id}` until the job reaches a terminal status.
pub async fn wait_for_job(app: &Router, job_id: &str) -> serde_json::Value {
    tokio::time::timeout(std::time::Duration::from_secs(10), async {
        loop {
            let response = get(app, &format!("/jobs/{job_id}")).await;
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            let status = json["data"]["status"].as_str().expect("status").to_string();
            if status == "succeeded" || status == "failed" {
                return json["data"].clone();
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("job did not reach a terminal status in time")
}
