use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;
use uuid::Uuid;

/// The kind of asset attached to a video record. Each kind carries its own
/// size ceiling and content-type allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Thumbnail,
    Video,
}

impl AssetKind {
    /// Name of the multipart file field this kind is submitted under.
    pub fn field_name(&self) -> &'static str {
        match self {
            AssetKind::Thumbnail => "thumbnail",
            AssetKind::Video => "video",
        }
    }
}

impl Display for AssetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AssetKind::Thumbnail => write!(f, "thumbnail"),
            AssetKind::Video => write!(f, "video"),
        }
    }
}

/// A video record. Created and deleted by an external collaborator; this
/// service only reads records and rewrites their asset URL fields after a
/// successful upload. URL fields may only be mutated on behalf of `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Video {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Whether the given identity owns this record.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Rewrite the URL field for the given asset kind.
    pub fn set_asset_url(&mut self, kind: AssetKind, url: String) {
        match kind {
            AssetKind::Thumbnail => self.thumbnail_url = Some(url),
            AssetKind::Video => self.video_url = Some(url),
        }
    }
}

/// API response shape for a video record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        VideoResponse {
            id: video.id,
            user_id: video.user_id,
            title: video.title,
            description: video.description,
            thumbnail_url: video.thumbnail_url,
            video_url: video.video_url,
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}
