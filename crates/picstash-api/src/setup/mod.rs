//! Application assembly: pool, services, routes, server.

pub mod routes;
pub mod server;

use crate::state::AppState;
use axum::Router;
use picstash_captions::{BlipHttpCaptioner, Captioner, FixedCaptioner};
use picstash_core::Config;
use picstash_db::{StatsRepository, UploadRepository};
use picstash_processing::pipeline::IngestPipeline;
use picstash_processing::validator::UploadValidator;
use std::sync::Arc;
use std::time::Duration;

/// Build the full application: record store, capabilities, state, router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let pool = picstash_db::init_pool(&config.database_url).await?;

    let uploads = UploadRepository::new(pool.clone());
    let stats = StatsRepository::new(pool);
    let pipeline = IngestPipeline::new(uploads.clone());
    let validator = UploadValidator::new(config.max_upload_bytes);

    // The caption model is a process-wide capability: loaded once here,
    // injected everywhere it is needed.
    let captioner: Arc<dyn Captioner> = match &config.caption_endpoint {
        Some(endpoint) => {
            tracing::info!(endpoint = %endpoint, "Using HTTP caption backend");
            Arc::new(BlipHttpCaptioner::new(
                endpoint.clone(),
                Duration::from_secs(config.caption_timeout_secs),
            )?)
        }
        None => {
            tracing::warn!("CAPTION_ENDPOINT not set, captions will use fixed text");
            Arc::new(FixedCaptioner::default())
        }
    };

    let state = Arc::new(AppState {
        config,
        uploads,
        stats,
        pipeline,
        captioner,
        validator,
    });

    let router = routes::build_router(state.clone());

    Ok((state, router))
}
