//! End-to-end tests for the aggregate statistics endpoint.

mod helpers;

use axum::http::StatusCode;
use serde_json::Value;

use helpers::{jpeg_bytes, png_bytes, setup_test_app, upload_file};

#[tokio::test]
async fn test_stats_with_no_records_reports_zeros() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/stats").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["images"]["total_images"], 0);
    assert_eq!(body["images"]["processed_images"], 0);
    assert_eq!(body["images"]["failed_images"], 0);
    assert_eq!(body["average_processing_time"], "0.00s (to 2 dp)");
    assert_eq!(body["success_failures_rate"]["success_rate"], "0.00%");
    assert_eq!(body["success_failures_rate"]["failure_rate"], "0.00%");
}

#[tokio::test]
async fn test_stats_after_successful_uploads() {
    let app = setup_test_app().await;

    upload_file(app.client(), "one.png", "image/png", png_bytes(64, 64)).await;
    upload_file(app.client(), "two.jpg", "image/jpeg", jpeg_bytes(96, 64)).await;

    let body: Value = app.client().get("/api/stats").await.json();

    assert_eq!(body["images"]["total_images"], 2);
    assert_eq!(body["images"]["processed_images"], 2);
    assert_eq!(body["images"]["failed_images"], 0);
    assert_eq!(body["success_failures_rate"]["success_rate"], "100.00%");
    assert_eq!(body["success_failures_rate"]["failure_rate"], "0.00%");

    let avg = body["average_processing_time"].as_str().unwrap();
    assert!(avg.ends_with("s (to 2 dp)"));
}

#[tokio::test]
async fn test_rejected_uploads_do_not_count() {
    let app = setup_test_app().await;

    upload_file(app.client(), "ok.png", "image/png", png_bytes(64, 64)).await;
    // Rejected before a record is created; stats must not see it.
    upload_file(app.client(), "nope.gif", "image/gif", png_bytes(64, 64)).await;

    let body: Value = app.client().get("/api/stats").await.json();
    assert_eq!(body["images"]["total_images"], 1);
    assert_eq!(body["images"]["processed_images"], 1);
}
