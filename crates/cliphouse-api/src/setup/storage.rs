//! Storage backend setup, one backend per asset kind.

use anyhow::{Context, Result};
use cliphouse_core::Config;
use cliphouse_storage::{create_thumbnail_storage, create_video_storage, Storage};
use std::sync::Arc;

pub async fn setup_storage(config: &Config) -> Result<(Arc<dyn Storage>, Arc<dyn Storage>)> {
    let thumbnails = create_thumbnail_storage(config)
        .await
        .context("Failed to initialize thumbnail storage")?;
    let videos = create_video_storage(config)
        .await
        .context("Failed to initialize video storage")?;

    tracing::info!(
        assets_root = %config.assets_root.display(),
        video_backend = %videos.backend_type(),
        "Storage backends ready"
    );

    Ok((thumbnails, videos))
}
