//! Shared application state.

use picstash_captions::Captioner;
use picstash_core::Config;
use picstash_db::{StatsRepository, UploadRepository};
use picstash_processing::pipeline::IngestPipeline;
use picstash_processing::validator::UploadValidator;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub uploads: UploadRepository,
    pub stats: StatsRepository,
    pub pipeline: IngestPipeline,
    /// Captioning capability, built once at startup and reused for every
    /// request. No per-request reconfiguration.
    pub captioner: Arc<dyn Captioner>,
    pub validator: UploadValidator,
}
