//! Upload repository
//!
//! All reads and writes for the `uploads` table go through here. Row types
//! stay private to this module; callers get clean domain models.

use picstash_core::models::{Upload, UploadListItem, UploadStatus};
use picstash_core::AppError;
use sqlx::SqlitePool;

#[derive(Debug, sqlx::FromRow)]
struct UploadRow {
    id: i64,
    filename: String,
    data: Option<Vec<u8>>,
    status: String,
    processing_time: f64,
    processed_at: Option<String>,
}

impl UploadRow {
    fn into_upload(self) -> Result<Upload, AppError> {
        let status = self
            .status
            .parse::<UploadStatus>()
            .map_err(AppError::Internal)?;
        Ok(Upload {
            id: self.id,
            filename: self.filename,
            data: self.data,
            status,
            processing_time: self.processing_time,
            processed_at: self.processed_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UploadListRow {
    id: i64,
    filename: String,
    status: String,
}

#[derive(Clone)]
pub struct UploadRepository {
    pool: SqlitePool,
}

impl UploadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a fresh record with status `processing`. The store assigns the
    /// id; it never changes afterwards.
    pub async fn insert(&self, filename: &str) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO uploads (filename, status) VALUES (?1, 'processing') RETURNING id",
        )
        .bind(filename)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Commit the `processing -> processed` transition: canonical PNG bytes,
    /// timing, and timestamp land in one statement. The status guard keeps
    /// the transition one-way.
    pub async fn finalize(
        &self,
        id: i64,
        data: &[u8],
        processing_time: f64,
        processed_at: &str,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE uploads
             SET data = ?1, status = 'processed', processing_time = ?2, processed_at = ?3
             WHERE id = ?4 AND status = 'processing'",
        )
        .bind(data)
        .bind(processing_time)
        .bind(processed_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Internal(format!(
                "Upload {} not in processing state, refusing status regression",
                id
            )));
        }
        Ok(())
    }

    /// Terminal state for an upload whose encode step failed. No data is
    /// written; the elapsed time is still recorded.
    pub async fn mark_failed(&self, id: i64, processing_time: f64) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE uploads SET status = 'failed', processing_time = ?1
             WHERE id = ?2 AND status = 'processing'",
        )
        .bind(processing_time)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get(&self, id: i64) -> Result<Option<Upload>, AppError> {
        let row: Option<UploadRow> = sqlx::query_as(
            "SELECT id, filename, data, status, processing_time, processed_at
             FROM uploads WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UploadRow::into_upload).transpose()
    }

    /// List every record, oldest first. Blob data is deliberately not
    /// selected here.
    pub async fn list(&self) -> Result<Vec<UploadListItem>, AppError> {
        let rows: Vec<UploadListRow> =
            sqlx::query_as("SELECT id, filename, status FROM uploads ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let status = row
                .status
                .parse::<UploadStatus>()
                .map_err(AppError::Internal)?;
            items.push(UploadListItem {
                id: row.id,
                filename: row.filename,
                status,
            });
        }
        Ok(items)
    }
}
