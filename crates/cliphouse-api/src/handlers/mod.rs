//! HTTP handlers.

pub mod thumbnail_upload;
pub mod video_get;
pub mod video_upload;

use axum::extract::Multipart;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::UserContext;
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::upload;
use cliphouse_core::models::{AssetKind, Video, VideoResponse};
use cliphouse_core::AppError;

/// Load the target record and enforce the single-owner rule. Every upload
/// path goes through this one check.
pub(crate) async fn load_owned_video(
    state: &AppState,
    video_id: Uuid,
    ctx: &UserContext,
) -> Result<Video, AppError> {
    let video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;

    if !video.is_owned_by(ctx.user_id) {
        return Err(AppError::Unauthorized(
            "Only the video owner may attach media".to_string(),
        ));
    }

    Ok(video)
}

/// Shared tail of both upload paths: negotiate the file part, stage it,
/// persist it under a generated name, and reconcile the record URL.
pub(crate) async fn attach_asset(
    state: &AppState,
    kind: AssetKind,
    video_id: Uuid,
    ctx: &UserContext,
    multipart: Multipart,
) -> Result<VideoResponse, HttpAppError> {
    let mut video = load_owned_video(state, video_id, ctx).await?;

    let limits = state.config.limits_for(kind);
    let staged = upload::negotiate_and_stage(multipart, kind.field_name(), &limits).await?;

    if staged.is_empty() {
        return Err(HttpAppError(AppError::InvalidInput(format!(
            "File part '{}' is empty",
            kind.field_name()
        ))));
    }

    let name = cliphouse_storage::random_object_name(&staged.media_type().extension);
    let stored = state
        .storage_for(kind)
        .put_stream(
            &name,
            &staged.media_type().essence,
            Some(staged.len()),
            staged.reader()?,
        )
        .await
        .map_err(HttpAppError::from)?;

    tracing::info!(
        video_id = %video_id,
        user_id = %ctx.user_id,
        kind = %kind,
        key = %stored.key,
        size_bytes = staged.len(),
        "Asset persisted"
    );

    video.set_asset_url(kind, stored.url);
    video.updated_at = Utc::now();
    if let Err(e) = state.videos.update(&video).await {
        // The stored object stays behind; name it so it can be reconciled.
        tracing::error!(
            error = %e,
            video_id = %video_id,
            key = %stored.key,
            "Record update failed after persistence; stored object is orphaned"
        );
        return Err(HttpAppError(e));
    }

    Ok(VideoResponse::from(video))
}
