//! Core domain types for picstash
//!
//! Shared models, configuration, and the unified error type used by the
//! database, processing, and API crates.

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
