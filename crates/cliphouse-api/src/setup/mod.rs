//! Application setup and initialization
//!
//! All application initialization logic lives here, extracted from main.rs
//! for better organization and testability.

pub mod database;
pub mod health;
pub mod routes;
pub mod server;
pub mod storage;

use crate::auth::JwtService;
use crate::state::AppState;
use anyhow::{Context, Result};
use cliphouse_core::Config;
use cliphouse_db::PgVideoStore;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry();
    tracing::info!("Configuration loaded and validated");

    let pool = database::setup_database(&config).await?;
    let (thumbnail_storage, video_storage) = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState {
        jwt: JwtService::new(&config.jwt_secret, config.jwt_expiry_hours),
        videos: Arc::new(PgVideoStore::new(pool)),
        thumbnail_storage,
        video_storage,
        config: config.clone(),
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
