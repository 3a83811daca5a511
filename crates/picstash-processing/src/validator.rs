//! Upload validation gate
//!
//! Rejects malformed uploads before any record is created: extension check,
//! size bounds, then a structural decode of the full byte stream. Rejection
//! is side-effect-free. On success the caller gets a fully materialized pixel
//! buffer, so nothing downstream has to rewind or re-read the input.

use crate::artifacts::{self, DecodedImage};
use image::error::ImageError;
use std::path::Path;

const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const MAX_FILENAME_BYTES: usize = 255;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Missing file extension (filename: {0})")]
    MissingExtension(String),

    #[error("Invalid extension: {extension} (allowed: {allowed:?})")]
    InvalidExtension {
        extension: String,
        allowed: &'static [&'static str],
    },

    #[error("Empty file")]
    EmptyFile,

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Corrupt image: {0}")]
    CorruptImage(String),

    #[error("Unexpected decode error: {0}")]
    UnexpectedDecode(String),
}

/// Upload validator
///
/// Holds the size limit; the extension allow-list is fixed because the
/// canonical stored representation only has JPEG and PNG decode paths.
#[derive(Clone)]
pub struct UploadValidator {
    max_file_size: usize,
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    /// Validate filename and bytes, returning the decoded image.
    pub fn validate(&self, filename: &str, data: &[u8]) -> Result<DecodedImage, ValidationError> {
        self.validate_filename(filename)?;
        self.validate_size(data.len())?;

        artifacts::decode(data).map_err(|e| match e {
            // Streams that do not parse as a complete, undamaged image of a
            // known format are client errors; everything else is unexpected.
            // Decoding runs over an in-memory cursor, so an IoError can only
            // mean the stream ended mid-image.
            ImageError::Decoding(err) => ValidationError::CorruptImage(err.to_string()),
            ImageError::Unsupported(err) => ValidationError::CorruptImage(err.to_string()),
            ImageError::Limits(err) => ValidationError::CorruptImage(err.to_string()),
            ImageError::IoError(err) => ValidationError::CorruptImage(err.to_string()),
            other => ValidationError::UnexpectedDecode(other.to_string()),
        })
    }

    fn validate_filename(&self, filename: &str) -> Result<(), ValidationError> {
        if filename.is_empty() || filename.len() > MAX_FILENAME_BYTES {
            return Err(ValidationError::InvalidFilename(filename.to_string()));
        }

        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| ValidationError::MissingExtension(filename.to_string()))?;

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ValidationError::InvalidExtension {
                extension,
                allowed: &ALLOWED_EXTENSIONS,
            });
        }

        Ok(())
    }

    fn validate_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }
}
