//! Declared media-type validation.
//!
//! The declared content type is the only input trusted for extension and
//! path construction; client-supplied filenames never are.

use crate::error::AppError;

/// A declared media type that passed the allow-list, with the canonical
/// extension derived from its subtype token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMediaType {
    /// Base type with parameters stripped, lowercased (e.g. "image/png").
    pub essence: String,
    /// Extension derived from the subtype token (e.g. "png").
    pub extension: String,
}

/// Normalize a MIME type by stripping parameters
/// (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
        .to_lowercase()
}

/// Validate a declared content type against an allow-list. Comparison uses
/// the normalized base type only, so parameters cannot bypass the list.
pub fn validate_media_type(
    content_type: &str,
    allowed_types: &[String],
) -> Result<ValidatedMediaType, AppError> {
    let essence = normalize_media_type(content_type);

    let (kind, subtype) = essence.split_once('/').ok_or_else(|| {
        AppError::InvalidInput(format!("Malformed content type: {}", content_type))
    })?;
    if kind.is_empty() || subtype.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "Malformed content type: {}",
            content_type
        )));
    }

    if !allowed_types.iter().any(|ct| essence == ct.to_lowercase()) {
        return Err(AppError::UnsupportedMediaType(format!(
            "{} (allowed: {})",
            essence,
            allowed_types.join(", ")
        )));
    }

    Ok(ValidatedMediaType {
        extension: subtype.to_string(),
        essence,
    })
}
