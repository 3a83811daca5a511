//! Upload record - the sole persistent entity
//!
//! An `Upload` is created with status `processing` the moment validation
//! succeeds, and transitions exactly once to `processed` (canonical PNG bytes
//! stored) or `failed` (encode error). Status never regresses and records are
//! never deleted.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Processing,
    Processed,
    Failed,
}

impl Display for UploadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadStatus::Processing => write!(f, "processing"),
            UploadStatus::Processed => write!(f, "processed"),
            UploadStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for UploadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(UploadStatus::Processing),
            "processed" => Ok(UploadStatus::Processed),
            "failed" => Ok(UploadStatus::Failed),
            other => Err(format!("Unknown upload status: {}", other)),
        }
    }
}

/// Full upload record as stored in the `uploads` table.
#[derive(Debug, Clone)]
pub struct Upload {
    pub id: i64,
    pub filename: String,
    /// Canonical PNG bytes. Absent until processing completes; written
    /// exactly once at the `processing -> processed` transition.
    pub data: Option<Vec<u8>>,
    pub status: UploadStatus,
    /// Seconds spent re-encoding, 0.0 until measured.
    pub processing_time: f64,
    /// `YYYY-MM-DDTHH:MM:SSZ`, set together with `processing_time`.
    pub processed_at: Option<String>,
}

/// Response body for a successful ingestion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadReceipt {
    pub image_id: i64,
    pub status: UploadStatus,
}

/// One entry in the upload listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadListItem {
    pub id: i64,
    pub filename: String,
    pub status: UploadStatus,
}
