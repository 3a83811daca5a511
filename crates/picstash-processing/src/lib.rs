//! Image processing for picstash
//!
//! The validation gate, the artifact deriver (metadata, thumbnails, canonical
//! PNG encode), and the ingestion pipeline that drives the record lifecycle.

pub mod artifacts;
pub mod pipeline;
pub mod validator;
