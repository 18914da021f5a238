use crate::traits::{Storage, StorageError, StorageResult, StoredObject};
use crate::StorageBackend;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;
use tokio::io::AsyncRead;

/// Local filesystem storage implementation
///
/// Objects are written into a staging file inside the base directory and
/// committed with an atomic rename, so a partially written object is never
/// visible under the publicly served root. A failed write drops the staging
/// file on the way out.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for object storage (e.g., "./assets")
    /// * `base_url` - Base URL the root is served under (e.g., "http://localhost:8091/assets")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Convert an object name to a filesystem path.
    ///
    /// Names are generated basenames; anything carrying a separator or a
    /// traversal sequence is rejected before touching the filesystem.
    fn name_to_path(&self, name: &str) -> StorageResult<PathBuf> {
        if name.is_empty()
            || name.contains("..")
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(StorageError::InvalidName(
                "Object name contains invalid characters".to_string(),
            ));
        }
        Ok(self.base_path.join(name))
    }

    /// Generate the public URL for an object.
    fn generate_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }

    async fn stage_and_commit(
        &self,
        final_path: &Path,
        mut reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<u64> {
        // Stage in the base directory itself so the commit rename stays on
        // one filesystem and is atomic. The NamedTempFile guard removes the
        // staging file on any early return.
        let staging = tempfile::Builder::new()
            .prefix(".staging-")
            .tempfile_in(&self.base_path)
            .map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to create staging file in {}: {}",
                    self.base_path.display(),
                    e
                ))
            })?;

        let mut file = fs::File::from_std(staging.reopen().map_err(|e| {
            StorageError::UploadFailed(format!("Failed to open staging file: {}", e))
        })?);

        let bytes_copied = tokio::io::copy(&mut reader, &mut file).await.map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to write stream to staging file for {}: {}",
                final_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to sync staging file for {}: {}",
                final_path.display(),
                e
            ))
        })?;
        drop(file);

        staging.persist(final_path).map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to commit {}: {}",
                final_path.display(),
                e.error
            ))
        })?;

        Ok(bytes_copied)
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put_stream(
        &self,
        name: &str,
        _content_type: &str,
        _content_length: Option<u64>,
        reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<StoredObject> {
        let path = self.name_to_path(name)?;
        let start = std::time::Instant::now();

        let bytes_copied = self.stage_and_commit(&path, reader).await?;

        let url = self.generate_url(name);

        tracing::info!(
            path = %path.display(),
            key = %name,
            size_bytes = bytes_copied,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(StoredObject {
            key: name.to_string(),
            url,
        })
    }

    async fn download(&self, key: &str) -> StorageResult<Vec<u8>> {
        let path = self.name_to_path(key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(key.to_string()));
        }

        let data = fs::read(&path).await.map_err(|e| {
            StorageError::DownloadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Ok(data)
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.name_to_path(key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), key = %key, "Local storage delete successful");

        Ok(())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.name_to_path(key)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
