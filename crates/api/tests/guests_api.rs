//! Integration tests for the catalog listing and poster file endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, test_config};

// ---------------------------------------------------------------------------
// Test: empty output directory lists as an empty array
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_output_directory_yields_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::create_dir_all(&config.output_dir).unwrap();
    let app = build_test_app(config);

    let response = get(&app, "/guests").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Test: posters are listed with recovered names and access URLs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn posters_are_listed_with_names_and_urls() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::create_dir_all(&config.output_dir).unwrap();
    for name in ["Alice", "Bob"] {
        let filename = posterly_core::naming::poster_filename(&config.poster_prefix, name);
        std::fs::write(config.output_dir.join(filename), b"png").unwrap();
    }
    let app = build_test_app(config);

    let response = get(&app, "/guests").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let records = json.as_array().expect("array body");
    assert_eq!(records.len(), 2);

    let mut names: Vec<&str> = records
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Alice", "Bob"]);

    for record in records {
        let url = record["url"].as_str().unwrap();
        assert!(!url.is_empty());
        assert!(url.starts_with("http://localhost:8080/guest_posters/"));
    }
}

// ---------------------------------------------------------------------------
// Test: a scan failure is a 500 response, not a process exit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_output_directory_is_a_500() {
    let dir = tempfile::tempdir().unwrap();
    // Output dir never created.
    let app = build_test_app(test_config(dir.path()));

    let response = get(&app, "/guests").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "SCAN_ERROR");
}

// ---------------------------------------------------------------------------
// Test: poster files are streamed with an image content type
// ---------------------------------------------------------------------------

#[tokio::test]
async fn existing_poster_is_streamed_as_png() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::create_dir_all(&config.output_dir).unwrap();
    std::fs::write(config.output_dir.join("poster.png"), b"fake png bytes").unwrap();
    let app = build_test_app(config);

    let response = get(&app, "/guest_posters/poster.png").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"fake png bytes");
}

#[tokio::test]
async fn missing_poster_is_a_404() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::create_dir_all(&config.output_dir).unwrap();
    let app = build_test_app(config);

    let response = get(&app, "/guest_posters/nope.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
