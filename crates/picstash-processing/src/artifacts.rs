//! Artifact deriver
//!
//! Pure operations over decoded pixel data: metadata extraction, thumbnail
//! generation, and the canonical PNG encode. No caching happens here; every
//! read request recomputes its artifacts from the stored bytes, and only the
//! canonical encoding is ever persisted.

use bytes::Bytes;
use image::error::{ImageError, ImageFormatHint, UnsupportedError};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use picstash_core::models::ImageMetadata;
use std::io::Cursor;
use std::str::FromStr;

/// A fully materialized pixel buffer together with the container format the
/// bytes arrived in.
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

/// Named thumbnail size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailPreset {
    Small,
    Medium,
}

impl ThumbnailPreset {
    pub const ALL: [ThumbnailPreset; 2] = [ThumbnailPreset::Small, ThumbnailPreset::Medium];

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            ThumbnailPreset::Small => (150, 150),
            ThumbnailPreset::Medium => (300, 300),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThumbnailPreset::Small => "small",
            ThumbnailPreset::Medium => "medium",
        }
    }
}

impl FromStr for ThumbnailPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(ThumbnailPreset::Small),
            "medium" => Ok(ThumbnailPreset::Medium),
            other => Err(other.to_string()),
        }
    }
}

/// Structurally decode a byte stream into a pixel buffer.
///
/// Decoding consumes and verifies the whole stream, so a successful return
/// doubles as the integrity check.
pub fn decode(data: &[u8]) -> Result<DecodedImage, ImageError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(ImageError::IoError)?;
    let format = reader.format().ok_or_else(|| {
        ImageError::Unsupported(UnsupportedError::from(ImageFormatHint::Unknown))
    })?;
    let image = reader.decode()?;
    Ok(DecodedImage { image, format })
}

/// Extract metadata from a decoded image.
///
/// `size_bytes` is the size of the raw uncompressed pixel buffer, not the
/// encoded file size. Surprising, but it is the documented contract.
pub fn extract_metadata(decoded: &DecodedImage) -> ImageMetadata {
    let (width, height) = decoded.image.dimensions();
    ImageMetadata {
        width,
        height,
        format: format!("{:?}", decoded.format),
        size_bytes: decoded.image.as_bytes().len() as u64,
    }
}

// Pixel counts can exceed u32; widen before multiplying.
fn estimated_png_size(width: u32, height: u32) -> usize {
    (width as u64 * height as u64 * 3) as usize
}

/// Re-encode a pixel buffer as canonical PNG.
pub fn encode_png(image: &DynamicImage) -> Result<Bytes, anyhow::Error> {
    let (width, height) = image.dimensions();
    let mut buffer = Vec::with_capacity(estimated_png_size(width, height));
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(Bytes::from(buffer))
}

/// Produce a PNG thumbnail that fits within the preset bounds.
///
/// Shrink-to-fit with the aspect ratio preserved; images already inside the
/// bounds are never upscaled.
pub fn thumbnail(image: &DynamicImage, preset: ThumbnailPreset) -> Result<Bytes, anyhow::Error> {
    let (max_width, max_height) = preset.dimensions();
    let (width, height) = image.dimensions();
    if width <= max_width && height <= max_height {
        return encode_png(image);
    }
    let resized = image.thumbnail(max_width, max_height);
    encode_png(&resized)
}
