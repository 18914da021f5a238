//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement.

use crate::StorageBackend;
use async_trait::async_trait;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid object name: {0}")]
    InvalidName(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// The final address of a persisted asset: its storage key and the public
/// URL derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
}

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait so
/// the upload pipeline can persist staged assets without coupling to
/// backend details.
///
/// **Naming:** object names are generated basenames (see the crate root
/// documentation); backends reject names containing path separators or
/// traversal sequences.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist an object from a reader and return its final address.
    ///
    /// The reader is consumed until EOF. Backends guarantee that no
    /// partially written object is ever visible at the returned address:
    /// local storage stages and renames, S3 puts atomically.
    async fn put_stream(
        &self,
        name: &str,
        content_type: &str,
        content_length: Option<u64>,
        reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<StoredObject>;

    /// Download an object by its storage key.
    async fn download(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Delete an object by its storage key. Deleting an absent object is
    /// not an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check whether an object exists.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
