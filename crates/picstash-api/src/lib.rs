//! HTTP surface for picstash
//!
//! Maps requests onto the ingestion pipeline and artifact deriver, and
//! serializes results. All state lives in [`state::AppState`]; routing and
//! server startup are under [`setup`].

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
