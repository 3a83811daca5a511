//! Ingestion pipeline
//!
//! Drives the record lifecycle for a validated upload: create the
//! `processing` record, time the canonical PNG encode, commit the final
//! state. Exactly two store writes happen on the success path; an encode
//! failure moves the record to `failed` instead of leaving it stuck.

use crate::artifacts;
use chrono::Utc;
use image::DynamicImage;
use picstash_core::models::{UploadReceipt, UploadStatus};
use picstash_core::AppError;
use picstash_db::UploadRepository;
use std::time::Instant;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Clone)]
pub struct IngestPipeline {
    uploads: UploadRepository,
}

impl IngestPipeline {
    pub fn new(uploads: UploadRepository) -> Self {
        Self { uploads }
    }

    /// Ingest a validated image under the given filename.
    ///
    /// The encode runs on the blocking pool; the caller still waits for the
    /// full duration (synchronous pipeline, no background workers).
    pub async fn ingest(
        &self,
        filename: &str,
        image: DynamicImage,
    ) -> Result<UploadReceipt, AppError> {
        let id = self.uploads.insert(filename).await?;
        tracing::info!(upload_id = id, filename = %filename, "Processing image");

        let started = Instant::now();
        let encoded = tokio::task::spawn_blocking(move || artifacts::encode_png(&image))
            .await
            .map_err(|e| AppError::Internal(format!("Encode task panicked: {}", e)))?;
        let elapsed = started.elapsed().as_secs_f64();

        match encoded {
            Ok(data) => {
                let processed_at = Utc::now().format(TIMESTAMP_FORMAT).to_string();
                self.uploads
                    .finalize(id, &data, elapsed, &processed_at)
                    .await?;
                tracing::info!(
                    upload_id = id,
                    filename = %filename,
                    processing_time = elapsed,
                    "Finished processing image"
                );
                Ok(UploadReceipt {
                    image_id: id,
                    status: UploadStatus::Processed,
                })
            }
            Err(e) => {
                tracing::error!(upload_id = id, error = %e, "PNG encoding failed");
                self.uploads.mark_failed(id, elapsed).await?;
                Err(AppError::ImageProcessing(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    async fn test_repository(dir: &TempDir) -> UploadRepository {
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("pipeline_test.sqlite3").display()
        );
        let pool = picstash_db::init_pool(&url).await.unwrap();
        UploadRepository::new(pool)
    }

    fn test_image() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(80, 60, Rgba([10, 20, 30, 255])))
    }

    #[tokio::test]
    async fn test_ingest_produces_processed_record() {
        let dir = TempDir::new().unwrap();
        let uploads = test_repository(&dir).await;
        let pipeline = IngestPipeline::new(uploads.clone());

        let receipt = pipeline.ingest("cat.jpg", test_image()).await.unwrap();
        assert_eq!(receipt.status, UploadStatus::Processed);

        let upload = uploads.get(receipt.image_id).await.unwrap().unwrap();
        assert_eq!(upload.status, UploadStatus::Processed);
        assert_eq!(upload.filename, "cat.jpg");
        assert!(upload.processing_time >= 0.0);

        // Stored bytes are canonical PNG with dimensions intact.
        let decoded = artifacts::decode(upload.data.as_deref().unwrap()).unwrap();
        assert_eq!(decoded.format, image::ImageFormat::Png);
        let meta = artifacts::extract_metadata(&decoded);
        assert_eq!((meta.width, meta.height), (80, 60));
    }

    #[tokio::test]
    async fn test_ingest_sets_timestamp_format() {
        let dir = TempDir::new().unwrap();
        let uploads = test_repository(&dir).await;
        let pipeline = IngestPipeline::new(uploads.clone());

        let receipt = pipeline.ingest("dog.png", test_image()).await.unwrap();
        let upload = uploads.get(receipt.image_id).await.unwrap().unwrap();

        let ts = upload.processed_at.unwrap();
        // YYYY-MM-DDTHH:MM:SSZ
        assert_eq!(ts.len(), 20);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially_and_never_reused() {
        let dir = TempDir::new().unwrap();
        let uploads = test_repository(&dir).await;
        let pipeline = IngestPipeline::new(uploads.clone());

        let first = pipeline.ingest("a.png", test_image()).await.unwrap();
        let second = pipeline.ingest("b.png", test_image()).await.unwrap();
        assert!(second.image_id > first.image_id);
    }
}
