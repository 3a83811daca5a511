//! HTTP-backed captioner
//!
//! Talks to a BLIP-style inference endpoint over JSON: the image goes out as
//! a base64 payload, the generated text comes back as `{"caption": "..."}`.

use crate::{CaptionError, Captioner};
use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct CaptionRequest {
    image: String,
}

#[derive(Debug, Deserialize)]
struct CaptionResponse {
    caption: String,
}

pub struct BlipHttpCaptioner {
    http_client: reqwest::Client,
    endpoint: String,
}

impl BlipHttpCaptioner {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client for captioning")?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }
}

#[async_trait]
impl Captioner for BlipHttpCaptioner {
    async fn caption(&self, image: &[u8]) -> Result<String, CaptionError> {
        let request = CaptionRequest {
            image: BASE64.encode(image),
        };

        tracing::debug!(endpoint = %self.endpoint, image_bytes = image.len(), "Requesting caption");

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: CaptionResponse = response
            .json()
            .await
            .map_err(|e| CaptionError::InvalidResponse(e.to_string()))?;

        let caption = body.caption.trim().to_string();
        if caption.is_empty() {
            return Err(CaptionError::InvalidResponse(
                "empty caption text".to_string(),
            ));
        }
        Ok(caption)
    }
}
