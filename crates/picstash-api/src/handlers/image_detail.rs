//! Image detail handler
//!
//! Recomputes metadata and the caption from the stored canonical PNG on
//! every request; nothing derived is cached. Thumbnail links point back at
//! the thumbnail endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use picstash_core::models::{ImageMetadata, UploadStatus};
use picstash_core::AppError;
use picstash_processing::artifacts;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ImageDetailResponse {
    pub status: UploadStatus,
    pub data: ImageDetailData,
    pub thumbnails: ThumbnailLinks,
    /// Set when the record never reached `processed`.
    pub error: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImageDetailData {
    pub id: i64,
    pub filename: String,
    pub metadata: ImageMetadata,
    pub processed_at: Option<String>,
    pub caption: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ThumbnailLinks {
    pub small: String,
    pub medium: String,
}

#[utoipa::path(
    get,
    path = "/api/images/{id}",
    tag = "images",
    params(
        ("id" = i64, Path, description = "Upload record id")
    ),
    responses(
        (status = 200, description = "Image details with derived artifacts", body = ImageDetailResponse),
        (status = 400, description = "Stored bytes failed to decode", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_image_details"))]
pub async fn get_image_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ImageDetailResponse>, HttpAppError> {
    let upload = state
        .uploads
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

    let bytes = upload.data.clone().ok_or_else(|| {
        AppError::UnreadableRecord(format!(
            "upload {} has no stored data (status {})",
            id, upload.status
        ))
    })?;

    let decode_bytes = bytes.clone();
    let decoded = tokio::task::spawn_blocking(move || artifacts::decode(&decode_bytes))
        .await
        .map_err(|e| AppError::Internal(format!("Decode task panicked: {}", e)))?
        .map_err(|e| AppError::UnreadableRecord(e.to_string()))?;

    let metadata = artifacts::extract_metadata(&decoded);

    let caption = state
        .captioner
        .caption(&bytes)
        .await
        .map_err(|e| AppError::Caption(e.to_string()))?;

    let base = state.config.public_base_url.trim_end_matches('/');
    let thumbnails = ThumbnailLinks {
        small: format!("{}/api/images/{}/thumbnails/small", base, id),
        medium: format!("{}/api/images/{}/thumbnails/medium", base, id),
    };

    let error = match upload.status {
        UploadStatus::Processed => None,
        UploadStatus::Processing | UploadStatus::Failed => Some(true),
    };

    Ok(Json(ImageDetailResponse {
        status: upload.status,
        data: ImageDetailData {
            id: upload.id,
            filename: upload.filename,
            metadata,
            processed_at: upload.processed_at,
            caption,
        },
        thumbnails,
        error,
    }))
}
