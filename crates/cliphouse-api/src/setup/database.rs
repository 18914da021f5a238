//! Database pool setup and migrations.

use anyhow::{Context, Result};
use cliphouse_core::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

pub async fn setup_database(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    cliphouse_db::run_migrations(&pool).await?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Database pool ready"
    );

    Ok(pool)
}
