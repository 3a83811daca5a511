//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Domain errors
//! become `AppError` (directly or via the `From` impls below) and render
//! consistently: status and client message from `ErrorMetadata`, detail only
//! in server-side logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use picstash_core::{AppError, ErrorMetadata, LogLevel};
use picstash_processing::validator::ValidationError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Wrapper type for AppError to implement IntoResponse.
/// Needed because of the orphan rule: IntoResponse is an external trait and
/// AppError lives in picstash-core.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        let app = match err {
            ValidationError::InvalidFilename(_) => {
                AppError::InvalidInput("Invalid filename.".to_string())
            }
            ValidationError::MissingExtension(filename) => AppError::UnsupportedFormat(filename),
            ValidationError::InvalidExtension { extension, .. } => {
                AppError::UnsupportedFormat(extension)
            }
            // An empty body can never parse as an undamaged image.
            ValidationError::EmptyFile => AppError::CorruptImage("empty file".to_string()),
            ValidationError::FileTooLarge { size, max } => {
                AppError::PayloadTooLarge(format!("{} bytes exceeds max {} bytes", size, max))
            }
            ValidationError::CorruptImage(msg) => AppError::CorruptImage(msg),
            ValidationError::UnexpectedDecode(msg) => AppError::UnexpectedDecode(msg),
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, code = code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, code = code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, code = code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
        });

        (status, body).into_response()
    }
}
