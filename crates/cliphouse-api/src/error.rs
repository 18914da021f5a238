//! HTTP error response conversion
//!
//! **Handler pattern:** return `Result<impl IntoResponse, HttpAppError>`.
//! Use `AppError` (or types that implement `Into<AppError>`) for errors and
//! `?` so they become `HttpAppError` and render consistently (status, body,
//! logging).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cliphouse_core::{AppError, ErrorMetadata, LogLevel};
use cliphouse_storage::StorageError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    /// Whether this error is recoverable (can be retried)
    pub recoverable: bool,
}

/// Wrapper type for AppError to implement IntoResponse.
/// Necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (type from cliphouse-core).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            StorageError::UploadFailed(msg) => AppError::Storage(msg),
            StorageError::DownloadFailed(msg) => AppError::Storage(msg),
            StorageError::DeleteFailed(msg) => AppError::Storage(msg),
            StorageError::BackendError(msg) => AppError::Storage(msg),
            StorageError::InvalidName(msg) => AppError::InvalidInput(msg),
            StorageError::IoError(err) => AppError::Internal(format!("IO error: {}", err)),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Request failed");
        }
    }
}

fn is_production_env() -> bool {
    std::env::var("ENVIRONMENT")
        .map(|env| {
            let env = env.to_lowercase();
            env == "production" || env == "prod"
        })
        .unwrap_or(false)
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // Hide internal details in production and for sensitive errors.
        let details = if is_production_env() || app_error.is_sensitive() {
            None
        } else {
            Some(app_error.detailed_message())
        };

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
            details,
            code: app_error.error_code().to_string(),
            recoverable: app_error.is_recoverable(),
        });

        (status, body).into_response()
    }
}
