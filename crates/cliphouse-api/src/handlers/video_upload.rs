use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use cliphouse_core::models::{AssetKind, VideoResponse};
use uuid::Uuid;

use crate::auth::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::attach_asset;
use crate::state::AppState;

/// Upload video handler
///
/// Accepts a `multipart/form-data` body with a single `video` file part,
/// stages it to a request-scoped spool file, persists it to the configured
/// object store under a generated key, and rewrites the record's video URL.
#[utoipa::path(
    post,
    path = "/api/videos/{id}/video",
    tag = "videos",
    params(
        ("id" = Uuid, Path, description = "Video record id")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video uploaded successfully", body = VideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(
        video_id = %video_id,
        user_id = %ctx.user_id,
        operation = "upload_video"
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    ctx: UserContext,
    Path(video_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let response = attach_asset(&state, AssetKind::Video, video_id, &ctx, multipart).await?;
    Ok(Json(response))
}
