//! Thumbnail handler
//!
//! Recomputes the requested preset from the stored canonical PNG on every
//! request. Size validation happens before the record lookup, so an unknown
//! preset is a 400 even for a nonexistent id.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use bytes::Bytes;
use picstash_core::AppError;
use picstash_processing::artifacts::{self, ThumbnailPreset};
use std::sync::Arc;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/images/{id}/thumbnails/{size}",
    tag = "images",
    params(
        ("id" = i64, Path, description = "Upload record id"),
        ("size" = String, Path, description = "Thumbnail preset: 'small' or 'medium'")
    ),
    responses(
        (status = 200, description = "PNG thumbnail", content_type = "image/png"),
        (status = 400, description = "Invalid size or undecodable stored bytes", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_thumbnail"))]
pub async fn get_thumbnail(
    State(state): State<Arc<AppState>>,
    Path((id, size)): Path<(i64, String)>,
) -> Result<Response, HttpAppError> {
    let preset: ThumbnailPreset = size.parse().map_err(AppError::InvalidThumbnailSize)?;

    let upload = state
        .uploads
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

    let bytes = upload.data.ok_or_else(|| {
        AppError::UnreadableRecord(format!("upload {} has no stored data", id))
    })?;

    let png: Bytes = tokio::task::spawn_blocking(move || -> Result<Bytes, AppError> {
        let decoded = artifacts::decode(&bytes)
            .map_err(|e| AppError::UnreadableRecord(e.to_string()))?;
        artifacts::thumbnail(&decoded.image, preset)
            .map_err(|e| AppError::ImageProcessing(e.to_string()))
    })
    .await
    .map_err(|e| AppError::Internal(format!("Thumbnail task panicked: {}", e)))??;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .body(Body::from(png))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
