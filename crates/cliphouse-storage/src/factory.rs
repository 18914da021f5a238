//! Configuration-driven storage construction, one backend per asset kind.

#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageBackend, StorageError, StorageResult};
use cliphouse_core::Config;
use std::sync::Arc;

/// Create the thumbnail storage backend.
///
/// Thumbnails always live on the local filesystem under the publicly served
/// asset root.
#[cfg(feature = "storage-local")]
pub async fn create_thumbnail_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage = LocalStorage::new(
        config.assets_root.clone(),
        config.assets_base_url.clone(),
    )
    .await?;
    Ok(Arc::new(storage))
}

#[cfg(not(feature = "storage-local"))]
pub async fn create_thumbnail_storage(_config: &Config) -> StorageResult<Arc<dyn Storage>> {
    Err(StorageError::ConfigError(
        "Local storage backend not available (storage-local feature not enabled)".to_string(),
    ))
}

/// Create the video storage backend based on configuration.
///
/// Production configurations use S3; the `local` backend keeps the full
/// pipeline runnable in development without an object store.
pub async fn create_video_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.video_storage_backend {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let bucket = config
                .s3_bucket
                .clone()
                .ok_or_else(|| StorageError::ConfigError("S3_BUCKET not configured".to_string()))?;
            let region = config.s3_region.clone().ok_or_else(|| {
                StorageError::ConfigError("S3_REGION or AWS_REGION not configured".to_string())
            })?;
            let endpoint = config.s3_endpoint.clone();

            let storage = S3Storage::new(bucket, region, endpoint).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config.assets_root.join("videos");
            let base_url = format!(
                "{}/videos",
                config.assets_base_url.trim_end_matches('/')
            );

            let storage = LocalStorage::new(base_path, base_url).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
