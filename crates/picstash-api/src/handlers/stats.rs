//! Statistics handler.

use axum::{extract::State, Json};
use picstash_core::models::UploadStats;
use picstash_core::AppError;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub images: StatsImages,
    pub average_processing_time: String,
    pub success_failures_rate: StatsRates,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsImages {
    pub total_images: i64,
    pub processed_images: i64,
    pub failed_images: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsRates {
    pub success_rate: String,
    pub failure_rate: String,
}

impl From<UploadStats> for StatsResponse {
    fn from(stats: UploadStats) -> Self {
        Self {
            images: StatsImages {
                total_images: stats.total,
                processed_images: stats.processed,
                failed_images: stats.failed,
            },
            average_processing_time: format!("{:.2}s (to 2 dp)", stats.avg_processing_time),
            success_failures_rate: StatsRates {
                success_rate: format!("{:.2}%", stats.success_rate),
                failure_rate: format!("{:.2}%", stats.failure_rate),
            },
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Aggregate processing statistics (zeros when no records exist)", body = StatsResponse)
    )
)]
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsResponse>, HttpAppError> {
    // Zero records is a defined state, not a fault: report zeros.
    let stats = match state.stats.collect().await {
        Ok(stats) => stats,
        Err(AppError::NoData) => UploadStats::empty(),
        Err(e) => return Err(e.into()),
    };

    Ok(Json(StatsResponse::from(stats)))
}
