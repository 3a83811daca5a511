//! Error types module
//!
//! All errors are unified under the `AppError` enum which can represent
//! database, validation, lookup, and processing failures. The `ErrorMetadata`
//! trait lets each variant self-describe its HTTP presentation so the API
//! crate never has to match on variants to pick a status code.

use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "corrupt_image")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("No file in the upload request")]
    MissingFile,

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Corrupt image: {0}")]
    CorruptImage(String),

    #[error("Unexpected decode error: {0}")]
    UnexpectedDecode(String),

    #[error("Stored image data is unreadable: {0}")]
    UnreadableRecord(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid thumbnail size: {0}")]
    InvalidThumbnailSize(String),

    #[error("No upload records exist")]
    NoData,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Caption generation error: {0}")]
    Caption(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::MissingFile
            | AppError::UnsupportedFormat(_)
            | AppError::CorruptImage(_)
            | AppError::UnreadableRecord(_)
            | AppError::InvalidThumbnailSize(_)
            | AppError::InvalidInput(_) => 400,
            AppError::NotFound(_) | AppError::NoData => 404,
            AppError::PayloadTooLarge(_) => 413,
            AppError::Database(_)
            | AppError::UnexpectedDecode(_)
            | AppError::ImageProcessing(_)
            | AppError::Caption(_)
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database_error",
            AppError::MissingFile => "missing_file",
            AppError::UnsupportedFormat(_) => "unsupported_format",
            AppError::CorruptImage(_) => "corrupt_image",
            AppError::UnexpectedDecode(_) => "unexpected_decode_error",
            AppError::UnreadableRecord(_) => "unreadable_record",
            AppError::NotFound(_) => "not_found",
            AppError::InvalidThumbnailSize(_) => "invalid_thumbnail_size",
            AppError::NoData => "no_data",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::ImageProcessing(_) => "image_processing_error",
            AppError::Caption(_) => "caption_error",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        // Client-facing wording is part of the API contract; internal detail
        // stays in the Display impl and server-side logs.
        match self {
            AppError::MissingFile => "No file uploaded.".to_string(),
            AppError::UnsupportedFormat(_) => {
                "Invalid images. Only JPEG and PNG files are allowed.".to_string()
            }
            AppError::CorruptImage(_) => "Broken or corrupted image file.".to_string(),
            AppError::UnreadableRecord(_) => "Processing failure".to_string(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::InvalidThumbnailSize(_) => {
                "Invalid thumbnail size. Choose 'small' or 'medium'.".to_string()
            }
            AppError::NoData => "No upload records exist".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::UnexpectedDecode(_)
            | AppError::Database(_)
            | AppError::ImageProcessing(_)
            | AppError::Caption(_)
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => {
                "An unexpected error occurred while processing the image.".to_string()
            }
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::MissingFile
            | AppError::UnsupportedFormat(_)
            | AppError::InvalidThumbnailSize(_)
            | AppError::NotFound(_)
            | AppError::NoData
            | AppError::InvalidInput(_)
            | AppError::PayloadTooLarge(_) => LogLevel::Debug,
            AppError::CorruptImage(_) | AppError::UnreadableRecord(_) => LogLevel::Warn,
            AppError::Database(_)
            | AppError::UnexpectedDecode(_)
            | AppError::ImageProcessing(_)
            | AppError::Caption(_)
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => LogLevel::Error,
        }
    }
}
