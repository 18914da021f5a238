//! Health check handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use std::time::Duration;

const READINESS_TIMEOUT: Duration = Duration::from_secs(5);

/// Liveness probe - process is running.
pub(crate) async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - critical dependencies (record store).
pub(crate) async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let database = match tokio::time::timeout(READINESS_TIMEOUT, state.videos.ping()).await {
        Ok(Ok(())) => "healthy".to_string(),
        Ok(Err(e)) => format!("error: {}", e),
        Err(_) => "timeout".to_string(),
    };

    let status = if database == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(serde_json::json!({
            "status": if status == StatusCode::OK { "ready" } else { "unavailable" },
            "database": database,
        })),
    )
}
