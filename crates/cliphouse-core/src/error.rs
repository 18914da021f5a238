//! Error types module
//!
//! This module provides the core error types used throughout the application.
//! All errors are unified under the `AppError` enum, which covers auth,
//! record-store, storage, and upload-validation failures.

use std::io;

use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like resource limits
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// This trait allows errors to self-describe their HTTP response characteristics.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

// Error conversion implementations

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidInput(format!("UUID parsing error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, recoverable, sensitive, log_level).
/// Client messages stay per-variant for dynamic content.
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, bool, LogLevel) {
    match err {
        AppError::Database(_) => (500, "DATABASE_ERROR", true, true, LogLevel::Error),
        AppError::Storage(_) => (500, "STORAGE_ERROR", true, true, LogLevel::Error),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, false, LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", false, false, LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", false, false, LogLevel::Debug),
        AppError::UnsupportedMediaType(_) => {
            (400, "UNSUPPORTED_MEDIA_TYPE", false, false, LogLevel::Debug)
        }
        AppError::Unauthorized(_) => (401, "UNAUTHORIZED", false, false, LogLevel::Warn),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", false, true, LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", false, true, LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Database(_) => "A database error occurred".to_string(),
            AppError::Storage(_) => "A storage error occurred".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::UnsupportedMediaType(msg) => msg.clone(),
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::Internal(_) => "An internal error occurred".to_string(),
            AppError::InternalWithSource { .. } => "An internal error occurred".to_string(),
        }
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).3
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).4
    }
}

impl AppError {
    /// Error type name for logging/telemetry.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Database",
            AppError::Storage(_) => "Storage",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::UnsupportedMediaType(_) => "UnsupportedMediaType",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Full internal message, including source chains where present.
    pub fn detailed_message(&self) -> String {
        match self {
            AppError::InternalWithSource { message, source } => {
                format!("{}: {}", message, source)
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_401() {
        let err = AppError::Unauthorized("bad token".to_string());
        assert_eq!(err.http_status_code(), 401);
        assert_eq!(err.error_code(), "UNAUTHORIZED");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_payload_too_large_maps_to_413() {
        let err = AppError::PayloadTooLarge("1073741825 bytes".to_string());
        assert_eq!(err.http_status_code(), 413);
        assert_eq!(err.error_code(), "PAYLOAD_TOO_LARGE");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_unsupported_media_type_maps_to_400() {
        let err = AppError::UnsupportedMediaType("image/gif".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "UNSUPPORTED_MEDIA_TYPE");
    }

    #[test]
    fn test_storage_error_is_sensitive() {
        let err = AppError::Storage("bucket unreachable".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert!(err.is_sensitive());
        assert_eq!(err.client_message(), "A storage error occurred");
    }

    #[test]
    fn test_io_error_converts_to_internal() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: AppError = io_err.into();
        match err {
            AppError::Internal(msg) => assert!(msg.contains("pipe closed")),
            other => panic!("expected Internal, got {:?}", other),
        }
    }
}
