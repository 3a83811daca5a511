//! Image metadata derived on demand from decoded pixel data.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    /// Container format of the decoded byte stream (e.g. "Png", "Jpeg").
    pub format: String,
    /// Size of the raw uncompressed pixel buffer, not the encoded file.
    pub size_bytes: u64,
}
