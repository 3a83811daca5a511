pub mod metadata;
pub mod stats;
pub mod upload;

pub use metadata::ImageMetadata;
pub use stats::UploadStats;
pub use upload::{Upload, UploadListItem, UploadReceipt, UploadStatus};
