//! Upload listing handler.

use axum::{extract::State, Json};
use picstash_core::models::UploadListItem;
use std::sync::Arc;

use crate::error::HttpAppError;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/images",
    tag = "images",
    responses(
        (status = 200, description = "All upload records", body = Vec<UploadListItem>)
    )
)]
pub async fn list_images(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UploadListItem>>, HttpAppError> {
    let items = state.uploads.list().await?;
    Ok(Json(items))
}
