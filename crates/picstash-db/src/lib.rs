//! Record store adapter for picstash
//!
//! Durable mapping from integer id to upload record, backed by SQLite through
//! sqlx. Exposes the repository operations the pipeline and aggregator need:
//! insert, finalize, mark-failed, get-by-id, list-all, per-status counts, and
//! average-of-field aggregation.

mod stats;
mod uploads;

pub use stats::StatsRepository;
pub use uploads::UploadRepository;

use picstash_core::AppError;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::time::Duration;

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Connect to the record store and bring the schema up to date.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;

    tracing::info!(database_url = %database_url, "Record store ready");
    Ok(pool)
}
