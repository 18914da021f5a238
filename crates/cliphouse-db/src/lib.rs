//! Cliphouse DB Library
//!
//! The media-record store: the `VideoStore` seam the upload pipeline talks
//! to, and its PostgreSQL implementation. Records are created and deleted
//! by an external collaborator sharing the schema; this crate only loads
//! and updates them.

pub mod video_store;

pub use video_store::{PgVideoStore, VideoStore};

/// Run embedded migrations against the given pool.
pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<(), anyhow::Error> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
    Ok(())
}
