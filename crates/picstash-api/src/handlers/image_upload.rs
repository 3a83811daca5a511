//! Image upload handler
//!
//! Pulls the `file` part out of the multipart body, runs the validation gate,
//! and hands the decoded image to the ingestion pipeline. A rejected upload
//! never creates a record.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use picstash_core::models::UploadReceipt;
use picstash_core::AppError;
use std::sync::Arc;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/images",
    tag = "images",
    responses(
        (status = 202, description = "Image accepted and processed", body = UploadReceipt),
        (status = 400, description = "Missing file, unsupported format, or corrupt image", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_image"))]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let mut file: Option<(String, axum::body::Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read upload: {}", e)))?;
            file = Some((filename, data));
            break;
        }
    }

    let (filename, data) = file.ok_or(AppError::MissingFile)?;
    if filename.is_empty() {
        return Err(AppError::MissingFile.into());
    }

    // Structural decode is CPU-bound; keep it off the async workers.
    let validator = state.validator.clone();
    let name = filename.clone();
    let decoded = tokio::task::spawn_blocking(move || validator.validate(&name, &data))
        .await
        .map_err(|e| AppError::Internal(format!("Validation task panicked: {}", e)))?
        .map_err(HttpAppError::from)?;

    let receipt = state.pipeline.ingest(&filename, decoded.image).await?;

    Ok((StatusCode::ACCEPTED, Json(receipt)))
}
