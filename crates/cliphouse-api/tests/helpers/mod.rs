//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p cliphouse-api --test upload_test`.
//! The record store is an in-memory stand-in for the external collaborator
//! and both asset kinds use local storage in a temp directory, so the full
//! pipeline runs without Postgres or S3.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use chrono::Utc;
use cliphouse_api::auth::JwtService;
use cliphouse_api::setup::routes::setup_routes;
use cliphouse_api::state::AppState;
use cliphouse_core::models::Video;
use cliphouse_core::{AppError, Config, StorageBackend};
use cliphouse_db::VideoStore;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-at-least-32-characters-long";

// Small ceilings keep the oversize tests cheap.
pub const TEST_THUMBNAIL_MAX_BYTES: usize = 64 * 1024;
pub const TEST_VIDEO_MAX_BYTES: usize = 256 * 1024;

/// In-memory record store standing in for the external collaborator.
pub struct MemoryVideoStore {
    videos: RwLock<HashMap<Uuid, Video>>,
}

impl MemoryVideoStore {
    pub fn new() -> Self {
        Self {
            videos: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a record, the way the owning service would create one.
    pub async fn insert(&self, video: Video) {
        self.videos.write().await.insert(video.id, video);
    }

    pub async fn fetch(&self, id: Uuid) -> Option<Video> {
        self.videos.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl VideoStore for MemoryVideoStore {
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self.videos.read().await.get(&id).cloned())
    }

    async fn update(&self, video: &Video) -> Result<(), AppError> {
        let mut videos = self.videos.write().await;
        if !videos.contains_key(&video.id) {
            return Err(AppError::NotFound(format!("Video {} not found", video.id)));
        }
        videos.insert(video.id, video.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Test application: server, record store, and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryVideoStore>,
    pub jwt: JwtService,
    pub assets_root: PathBuf,
    _assets_dir: TempDir,
}

fn test_config(assets_root: PathBuf) -> Config {
    Config {
        server_port: 8091,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        database_url: "postgres://unused-in-tests/cliphouse".to_string(),
        db_max_connections: 5,
        db_timeout_seconds: 30,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiry_hours: 24,
        assets_root,
        assets_base_url: "http://localhost:8091/assets".to_string(),
        video_storage_backend: StorageBackend::Local,
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        thumbnail_max_bytes: TEST_THUMBNAIL_MAX_BYTES,
        thumbnail_allowed_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
        video_max_bytes: TEST_VIDEO_MAX_BYTES,
        video_allowed_types: vec!["video/mp4".to_string()],
    }
}

/// Setup a test app with an in-memory record store and temp-dir storage.
pub async fn setup_test_app() -> TestApp {
    let assets_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let assets_root = assets_dir.path().to_path_buf();
    let config = test_config(assets_root.clone());

    let store = Arc::new(MemoryVideoStore::new());
    let thumbnail_storage = cliphouse_storage::create_thumbnail_storage(&config)
        .await
        .expect("Failed to create thumbnail storage");
    let video_storage = cliphouse_storage::create_video_storage(&config)
        .await
        .expect("Failed to create video storage");

    let jwt = JwtService::new(&config.jwt_secret, config.jwt_expiry_hours);

    let state = Arc::new(AppState {
        jwt: jwt.clone(),
        videos: store.clone(),
        thumbnail_storage,
        video_storage,
        config: config.clone(),
    });

    let router = setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        store,
        jwt,
        assets_root,
        _assets_dir: assets_dir,
    }
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Seed a record owned by the given user, the way the record-owning
    /// service would have created it.
    pub async fn seed_video(&self, owner: Uuid) -> Video {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            user_id: owner,
            title: "integration clip".to_string(),
            description: Some("seeded by tests".to_string()),
            thumbnail_url: None,
            video_url: None,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(video.clone()).await;
        video
    }

    pub fn token_for(&self, user_id: Uuid) -> String {
        self.jwt.issue(user_id).expect("Failed to mint test token")
    }

    /// Count regular files under the asset root (recursively). Zero means
    /// nothing was persisted.
    pub fn persisted_file_count(&self) -> usize {
        fn walk(dir: &std::path::Path) -> usize {
            let mut count = 0;
            if let Ok(entries) = std::fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.is_dir() {
                        count += walk(&path);
                    } else {
                        count += 1;
                    }
                }
            }
            count
        }
        walk(&self.assets_root)
    }
}

/// Build a single-file multipart form for an upload request.
pub fn file_form(field: &str, data: Vec<u8>, filename: &str, mime: &str) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(filename.to_string())
        .mime_type(mime.to_string());
    MultipartForm::new().add_part(field.to_string(), part)
}

/// Basename of an asset URL (the generated object name).
pub fn url_basename(url: &str) -> &str {
    url.rsplit('/').next().unwrap()
}
