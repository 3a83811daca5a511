//! Shared harness for API integration tests: a TestServer over a
//! tempfile-backed SQLite store and a fixed-text captioner.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use image::{DynamicImage, ImageFormat, RgbImage};
use picstash_api::setup::routes::build_router;
use picstash_api::state::AppState;
use picstash_captions::FixedCaptioner;
use picstash_core::Config;
use picstash_db::{StatsRepository, UploadRepository};
use picstash_processing::pipeline::IngestPipeline;
use picstash_processing::validator::UploadValidator;
use std::io::Cursor;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_CAPTION: &str = "a solid color test image";

pub struct TestApp {
    pub server: TestServer,
    _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("create temp dir");
    let database_url = format!(
        "sqlite://{}?mode=rwc",
        temp_dir.path().join("picstash_test.sqlite3").display()
    );

    let config = Config {
        server_port: 0,
        database_url: database_url.clone(),
        public_base_url: "http://localhost:8000".to_string(),
        max_upload_bytes: 8 * 1024 * 1024,
        caption_endpoint: None,
        caption_timeout_secs: 5,
    };

    let pool = picstash_db::init_pool(&database_url)
        .await
        .expect("init record store");
    let uploads = UploadRepository::new(pool.clone());
    let stats = StatsRepository::new(pool);
    let pipeline = IngestPipeline::new(uploads.clone());
    let validator = UploadValidator::new(config.max_upload_bytes);

    let state = Arc::new(AppState {
        config,
        uploads,
        stats,
        pipeline,
        captioner: Arc::new(FixedCaptioner::new(TEST_CAPTION)),
        validator,
    });

    let server = TestServer::new(build_router(state)).expect("start test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
    }
}

fn solid_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([90, 120, 40])))
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Vec::new();
    solid_image(width, height)
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("encode test png");
    buffer
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Vec::new();
    solid_image(width, height)
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
        .expect("encode test jpeg");
    buffer
}

pub async fn upload_file(
    server: &TestServer,
    filename: &str,
    content_type: &str,
    data: Vec<u8>,
) -> TestResponse {
    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(data)
            .file_name(filename)
            .mime_type(content_type),
    );
    server.post("/api/images").multipart(form).await
}
