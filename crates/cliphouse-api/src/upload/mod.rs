//! Multipart upload pipeline: content negotiation, declared-type
//! validation, and request-scoped staging.
//!
//! The per-kind byte ceiling is imposed on the whole request body by the
//! route's `DefaultBodyLimit` before any parsing begins; multipart reads
//! through the limited body, so an oversized upload aborts mid-stream
//! without being buffered. Limit trips surface here as `PayloadTooLarge`.

pub mod staging;

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use cliphouse_core::{validate_media_type, AppError, UploadLimits};

pub use staging::StagedUpload;

/// Map a multipart read failure to the typed taxonomy. A tripped body
/// limit is a `PayloadTooLarge`; everything else is a malformed request.
pub(crate) fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(
            "Request body exceeds the configured upload ceiling".to_string(),
        )
    } else {
        AppError::InvalidInput(format!("Failed to read multipart form: {}", err))
    }
}

/// Walk the multipart form to the single named file part, validate its
/// declared content type against the kind's allow-list, and spool the part
/// into a request-scoped staging file.
///
/// The client-supplied filename is deliberately ignored; the extension
/// comes from the validated content type only.
pub async fn negotiate_and_stage(
    mut multipart: Multipart,
    field_name: &str,
    limits: &UploadLimits,
) -> Result<StagedUpload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(field_name) {
            continue;
        }

        let declared = field
            .content_type()
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "File part '{}' is missing a content type",
                    field_name
                ))
            })?
            .to_string();

        let media_type = validate_media_type(&declared, &limits.allowed_types)?;

        return StagedUpload::spool(field, media_type, limits.max_bytes).await;
    }

    Err(AppError::InvalidInput(format!(
        "Multipart form is missing a '{}' file part",
        field_name
    )))
}
