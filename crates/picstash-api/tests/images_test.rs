//! End-to-end tests for upload, listing, and detail retrieval.

mod helpers;

use axum::http::StatusCode;
use serde_json::Value;

use helpers::{jpeg_bytes, png_bytes, setup_test_app, upload_file, TEST_CAPTION};

#[tokio::test]
async fn test_upload_valid_jpeg_creates_processed_record() {
    let app = setup_test_app().await;

    let response = upload_file(
        app.client(),
        "cat.jpg",
        "image/jpeg",
        jpeg_bytes(800, 600),
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::ACCEPTED);
    let body: Value = response.json();
    assert!(body["image_id"].as_i64().unwrap() > 0);
    assert_eq!(body["status"], "processed");

    let list: Value = app.client().get("/api/images").await.json();
    let records = list.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["filename"], "cat.jpg");
    assert_eq!(records[0]["status"], "processed");
}

#[tokio::test]
async fn test_upload_unsupported_extension_is_rejected() {
    let app = setup_test_app().await;

    let response = upload_file(app.client(), "cat.gif", "image/gif", png_bytes(64, 48)).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Invalid images. Only JPEG and PNG files are allowed."
    );

    // A rejected upload must not leave a record behind.
    let list: Value = app.client().get("/api/images").await.json();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_corrupt_png_is_rejected() {
    let app = setup_test_app().await;

    let mut truncated = png_bytes(64, 48);
    truncated.truncate(truncated.len() / 2);

    let response = upload_file(app.client(), "broken.png", "image/png", truncated).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Broken or corrupted image file.");

    let list: Value = app.client().get("/api/images").await.json();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_without_file_part_is_rejected() {
    let app = setup_test_app().await;

    let form = axum_test::multipart::MultipartForm::new().add_part(
        "attachment",
        axum_test::multipart::Part::bytes(png_bytes(16, 16))
            .file_name("cat.png")
            .mime_type("image/png"),
    );
    let response = app.client().post("/api/images").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No file uploaded.");
}

#[tokio::test]
async fn test_image_details_include_metadata_and_caption() {
    let app = setup_test_app().await;

    let receipt: Value = upload_file(
        app.client(),
        "cat.jpg",
        "image/jpeg",
        jpeg_bytes(800, 600),
    )
    .await
    .json();
    let id = receipt["image_id"].as_i64().unwrap();

    let response = app.client().get(&format!("/api/images/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "processed");
    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["data"]["id"].as_i64().unwrap(), id);
    assert_eq!(body["data"]["filename"], "cat.jpg");
    assert_eq!(body["data"]["caption"], TEST_CAPTION);
    assert!(body["data"]["processed_at"].is_string());

    // Metadata reflects the canonical PNG, not the uploaded JPEG.
    let metadata = &body["data"]["metadata"];
    assert_eq!(metadata["width"].as_u64().unwrap(), 800);
    assert_eq!(metadata["height"].as_u64().unwrap(), 600);
    assert_eq!(metadata["format"], "Png");
    assert!(metadata["size_bytes"].as_u64().unwrap() > 0);

    let thumbnails = &body["thumbnails"];
    assert!(thumbnails["small"]
        .as_str()
        .unwrap()
        .ends_with(&format!("/api/images/{}/thumbnails/small", id)));
    assert!(thumbnails["medium"]
        .as_str()
        .unwrap()
        .ends_with(&format!("/api/images/{}/thumbnails/medium", id)));
}

#[tokio::test]
async fn test_image_details_are_stable_across_reads() {
    let app = setup_test_app().await;

    let receipt: Value = upload_file(app.client(), "cat.png", "image/png", png_bytes(320, 240))
        .await
        .json();
    let id = receipt["image_id"].as_i64().unwrap();

    let first: Value = app.client().get(&format!("/api/images/{}", id)).await.json();
    let second: Value = app.client().get(&format!("/api/images/{}", id)).await.json();

    // Derived artifacts are recomputed per request but must be identical.
    assert_eq!(first["data"]["metadata"], second["data"]["metadata"]);
    assert_eq!(first["data"]["caption"], second["data"]["caption"]);
}

#[tokio::test]
async fn test_image_details_unknown_id_is_not_found() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/images/999999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Image not found");
}

#[tokio::test]
async fn test_listing_preserves_all_uploads() {
    let app = setup_test_app().await;

    upload_file(app.client(), "one.png", "image/png", png_bytes(32, 32)).await;
    upload_file(app.client(), "two.jpg", "image/jpeg", jpeg_bytes(48, 32)).await;

    let list: Value = app.client().get("/api/images").await.json();
    let records = list.as_array().unwrap();
    assert_eq!(records.len(), 2);

    let filenames: Vec<&str> = records
        .iter()
        .map(|r| r["filename"].as_str().unwrap())
        .collect();
    assert!(filenames.contains(&"one.png"));
    assert!(filenames.contains(&"two.jpg"));
}
