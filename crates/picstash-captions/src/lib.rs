//! Caption generation for picstash
//!
//! The caption model is an opaque capability: encoded image in, text out. It
//! is loaded once at process start and injected where needed; implementations
//! may be slow, and callers block for the full call (no timeout beyond the
//! HTTP client's own).

mod blip_http;
mod fixed;

pub use blip_http::BlipHttpCaptioner;
pub use fixed::FixedCaptioner;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    #[error("Caption request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Caption backend returned an unusable response: {0}")]
    InvalidResponse(String),
}

/// Process-wide captioning capability.
///
/// Implementations must be deterministic per loaded weights but are allowed
/// to vary between deployments; callers only rely on "image in, string out".
#[async_trait]
pub trait Captioner: Send + Sync {
    /// Generate a caption for an encoded image (PNG or JPEG bytes).
    async fn caption(&self, image: &[u8]) -> Result<String, CaptionError>;
}
