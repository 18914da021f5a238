use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use cliphouse_core::models::VideoResponse;
use cliphouse_core::AppError;
use uuid::Uuid;

use crate::auth::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Fetch a video record.
#[utoipa::path(
    get,
    path = "/api/videos/{id}",
    tag = "videos",
    params(
        ("id" = Uuid, Path, description = "Video record id")
    ),
    responses(
        (status = 200, description = "Video record", body = VideoResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse)
    )
)]
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    _ctx: UserContext,
    Path(video_id): Path<Uuid>,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;

    Ok(Json(VideoResponse::from(video)))
}
