//! Video record store.

use async_trait::async_trait;
use cliphouse_core::models::Video;
use cliphouse_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

/// Keyed lookup and write-back of video records.
///
/// This is the seam to the record store: the upload pipeline loads a record
/// through it, rewrites a URL field, and writes the record back. Tests
/// substitute an in-memory implementation.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Load a record by id. `None` when absent.
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError>;

    /// Write a record back. Fails with `NotFound` when the record has
    /// disappeared underneath us, `Database` on store failure.
    async fn update(&self, video: &Video) -> Result<(), AppError>;

    /// Health probe against the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}

/// PostgreSQL-backed video store.
#[derive(Clone)]
pub struct PgVideoStore {
    pool: PgPool,
}

impl PgVideoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, user_id, title, description, thumbnail_url, video_url,
                   created_at, updated_at
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(video)
    }

    async fn update(&self, video: &Video) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE videos
            SET title = $2,
                description = $3,
                thumbnail_url = $4,
                video_url = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .bind(video.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Video {} not found", video.id)));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
