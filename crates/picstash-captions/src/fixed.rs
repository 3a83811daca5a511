//! Fixed-text captioner for deployments without a caption backend and for
//! tests.

use crate::{CaptionError, Captioner};
use async_trait::async_trait;

const DEFAULT_CAPTION: &str = "an uploaded image";

pub struct FixedCaptioner {
    text: String,
}

impl FixedCaptioner {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for FixedCaptioner {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTION)
    }
}

#[async_trait]
impl Captioner for FixedCaptioner {
    async fn caption(&self, _image: &[u8]) -> Result<String, CaptionError> {
        Ok(self.text.clone())
    }
}
