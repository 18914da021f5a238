//! Request-scoped upload staging.
//!
//! A validated file part is streamed chunk-by-chunk into a private
//! temporary file. The staging file is owned by `StagedUpload` and removed
//! on drop, so every exit path - including a client disconnect mid-copy -
//! releases it. Persisters that need a second pass reopen the file at
//! offset zero.

use std::pin::Pin;

use axum::extract::multipart::Field;
use cliphouse_core::{AppError, ValidatedMediaType};
use tempfile::NamedTempFile;
use tokio::io::{AsyncRead, AsyncWriteExt};

use super::multipart_error;

/// A spooled upload: the staged bytes plus their negotiated media type.
pub struct StagedUpload {
    staging: NamedTempFile,
    media_type: ValidatedMediaType,
    len: u64,
}

impl StagedUpload {
    /// Stream the field into a fresh staging file, enforcing the byte
    /// ceiling at the stream level.
    pub(crate) async fn spool(
        mut field: Field<'_>,
        media_type: ValidatedMediaType,
        max_bytes: usize,
    ) -> Result<Self, AppError> {
        let staging = NamedTempFile::new()
            .map_err(|e| AppError::Internal(format!("Failed to create staging file: {}", e)))?;

        let mut file = tokio::fs::File::from_std(staging.reopen().map_err(|e| {
            AppError::Internal(format!("Failed to open staging file: {}", e))
        })?);

        let mut len: u64 = 0;
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            len += chunk.len() as u64;
            if len > max_bytes as u64 {
                return Err(AppError::PayloadTooLarge(format!(
                    "File part exceeds the {} byte ceiling",
                    max_bytes
                )));
            }
            file.write_all(&chunk).await.map_err(|e| {
                AppError::Internal(format!("Failed to write staging file: {}", e))
            })?;
        }

        file.flush()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to flush staging file: {}", e)))?;

        Ok(Self {
            staging,
            media_type,
            len,
        })
    }

    pub fn media_type(&self) -> &ValidatedMediaType {
        &self.media_type
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reopen the staged bytes at offset zero for the persistence pass.
    /// The staging file stays alive (and owned) until `self` drops.
    pub fn reader(&self) -> Result<Pin<Box<dyn AsyncRead + Send + Unpin>>, AppError> {
        let file = self.staging.reopen().map_err(|e| {
            AppError::Internal(format!("Failed to reopen staging file: {}", e))
        })?;
        Ok(Box::pin(tokio::fs::File::from_std(file)))
    }
}
