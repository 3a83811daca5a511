//! Aggregate upload statistics.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadStats {
    pub total: i64,
    pub processed: i64,
    /// Count of records with status `failed`. Records still mid-processing
    /// are counted in neither `processed` nor `failed`.
    pub failed: i64,
    /// Mean of `processing_time` over all records, including ones whose
    /// value is still the 0.0 default.
    pub avg_processing_time: f64,
    /// `processed / total` as a percentage, rounded to 2 decimal places.
    pub success_rate: f64,
    /// `failed / total` as a percentage, rounded to 2 decimal places.
    pub failure_rate: f64,
}

impl UploadStats {
    /// Defined zero-record shape: everything zeroed, no division happens.
    pub fn empty() -> Self {
        Self {
            total: 0,
            processed: 0,
            failed: 0,
            avg_processing_time: 0.0,
            success_rate: 0.0,
            failure_rate: 0.0,
        }
    }
}
