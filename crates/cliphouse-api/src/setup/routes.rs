//! Route configuration and setup.

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::setup::health;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use cliphouse_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let public_routes = Router::new()
        .route("/health/live", get(health::liveness_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        // Locally persisted assets (thumbnails) are served straight from
        // the asset root, making their URLs resolvable.
        .nest_service("/assets", ServeDir::new(&config.assets_root))
        .with_state(state.clone());

    let protected_routes = video_routes(config, state.clone()).layer(
        axum::middleware::from_fn_with_state(
            state.clone(),
            crate::auth::middleware::auth_middleware,
        ),
    );

    let app = public_routes
        .merge(protected_routes)
        .nest(
            "/docs",
            utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
                .path("/docs")
                .into(),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(app)
}

/// Video routes. Upload routes carry their asset kind's byte ceiling as a
/// body limit so oversized uploads abort before any parsing or buffering.
fn video_routes(config: &Config, state: Arc<AppState>) -> Router {
    let thumbnail_upload = Router::new()
        .route(
            "/api/videos/{id}/thumbnail",
            post(handlers::thumbnail_upload::upload_thumbnail),
        )
        .layer(DefaultBodyLimit::max(config.thumbnail_max_bytes))
        .with_state(state.clone());

    let video_upload = Router::new()
        .route(
            "/api/videos/{id}/video",
            post(handlers::video_upload::upload_video),
        )
        .layer(DefaultBodyLimit::max(config.video_max_bytes))
        .with_state(state.clone());

    let reads = Router::new()
        .route("/api/videos/{id}", get(handlers::video_get::get_video))
        .with_state(state);

    thumbnail_upload.merge(video_upload).merge(reads)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };
    Ok(cors)
}
