//! Statistics aggregation over the full record set.

use picstash_core::models::UploadStats;
use picstash_core::AppError;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct StatsRepository {
    pool: SqlitePool,
}

impl StatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Compute counts and rates over the current snapshot of the store.
    ///
    /// Returns `AppError::NoData` when no records exist so callers decide how
    /// to present the empty case instead of dividing by zero. The average
    /// runs over all records, including ones whose `processing_time` is still
    /// the 0.0 default.
    pub async fn collect(&self) -> Result<UploadStats, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM uploads")
            .fetch_one(&self.pool)
            .await?;

        if total == 0 {
            return Err(AppError::NoData);
        }

        let processed: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM uploads WHERE status = 'processed'")
                .fetch_one(&self.pool)
                .await?;
        let failed: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM uploads WHERE status = 'failed'")
                .fetch_one(&self.pool)
                .await?;
        let avg: Option<f64> = sqlx::query_scalar("SELECT AVG(processing_time) FROM uploads")
            .fetch_one(&self.pool)
            .await?;

        Ok(UploadStats {
            total,
            processed,
            failed,
            avg_processing_time: round2(avg.unwrap_or(0.0)),
            success_rate: round2(processed as f64 / total as f64 * 100.0),
            failure_rate: round2(failed as f64 / total as f64 * 100.0),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
