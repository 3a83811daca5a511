//! Configuration module
//!
//! Configuration is read from the environment with working defaults for every
//! field, so a bare `picstash-api` binary starts with a local SQLite file on
//! port 8000 and no captioning backend.

use std::env;
use std::str::FromStr;

const DEFAULT_SERVER_PORT: u16 = 8000;
const DEFAULT_DATABASE_URL: &str = "sqlite://picstash.sqlite3?mode=rwc";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;
const DEFAULT_CAPTION_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server binds to.
    pub server_port: u16,
    /// SQLite connection URL for the upload record store.
    pub database_url: String,
    /// Base URL used when building absolute thumbnail links.
    pub public_base_url: String,
    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
    /// Captioning inference endpoint. When unset, a fixed-text captioner is
    /// used so the detail endpoint stays functional.
    pub caption_endpoint: Option<String>,
    /// Timeout for a single caption model call. Captioning is a blocking,
    /// potentially slow call in the request path; this bounds it.
    pub caption_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server_port: env_or("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            caption_endpoint: env::var("CAPTION_ENDPOINT").ok().filter(|s| !s.is_empty()),
            caption_timeout_secs: env_or("CAPTION_TIMEOUT_SECS", DEFAULT_CAPTION_TIMEOUT_SECS)?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
