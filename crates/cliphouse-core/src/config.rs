//! Configuration module
//!
//! Explicit, immutable configuration loaded from the environment at startup
//! and passed into each component at construction. Validation happens once,
//! before anything binds a port or opens a pool.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::models::AssetKind;
use crate::storage_types::StorageBackend;

// Defaults
const DEFAULT_PORT: u16 = 8091;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const JWT_EXPIRY_HOURS: i64 = 24;
const THUMBNAIL_MAX_BYTES: usize = 10 * 1024 * 1024; // 10 MiB
const VIDEO_MAX_BYTES: usize = 1 << 30; // 1 GiB

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // Database
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Auth
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    // Thumbnail storage (local filesystem, publicly served)
    pub assets_root: PathBuf,
    pub assets_base_url: String,
    // Video storage (object store; `local` supported for development)
    pub video_storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
    // Upload ceilings and allow-lists, per asset kind
    pub thumbnail_max_bytes: usize,
    pub thumbnail_allowed_types: Vec<String>,
    pub video_max_bytes: usize,
    pub video_allowed_types: Vec<String>,
}

/// Size ceiling and content-type allow-list for a single asset kind.
#[derive(Clone, Debug)]
pub struct UploadLimits {
    pub max_bytes: usize,
    pub allowed_types: Vec<String>,
}

fn env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_list(key: &str, default: &[&str]) -> Vec<String> {
    match env::var(key) {
        Ok(raw) => raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Err(_) => default.iter().map(|s| s.to_string()).collect(),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let server_port = env_parse("PORT", DEFAULT_PORT);
        let assets_base_url = env::var("ASSETS_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}/assets", server_port));

        let video_storage_backend = env::var("VIDEO_STORAGE_BACKEND")
            .unwrap_or_else(|_| "s3".to_string())
            .parse::<StorageBackend>()
            .map_err(|e| anyhow::anyhow!(e))?;

        Ok(Config {
            server_port,
            environment: env_string("ENVIRONMENT", "development"),
            cors_origins: env_list("CORS_ORIGINS", &["*"]),
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", MAX_CONNECTIONS),
            db_timeout_seconds: env_parse("DB_TIMEOUT_SECONDS", CONNECTION_TIMEOUT_SECS),
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set"))?,
            jwt_expiry_hours: env_parse("JWT_EXPIRY_HOURS", JWT_EXPIRY_HOURS),
            assets_root: PathBuf::from(env_string("ASSETS_ROOT", "./assets")),
            assets_base_url,
            video_storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok().or(env::var("AWS_REGION").ok()),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            thumbnail_max_bytes: env_parse("THUMBNAIL_MAX_BYTES", THUMBNAIL_MAX_BYTES),
            thumbnail_allowed_types: env_list(
                "THUMBNAIL_ALLOWED_TYPES",
                &["image/jpeg", "image/png"],
            ),
            video_max_bytes: env_parse("VIDEO_MAX_BYTES", VIDEO_MAX_BYTES),
            video_allowed_types: env_list("VIDEO_ALLOWED_TYPES", &["video/mp4"]),
        })
    }

    /// Fail fast on misconfiguration.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < 32 {
            anyhow::bail!("JWT_SECRET must be at least 32 characters");
        }
        if self.video_storage_backend == StorageBackend::S3 {
            if self.s3_bucket.is_none() {
                anyhow::bail!("S3_BUCKET must be set when VIDEO_STORAGE_BACKEND is s3");
            }
            if self.s3_region.is_none() {
                anyhow::bail!("S3_REGION or AWS_REGION must be set when VIDEO_STORAGE_BACKEND is s3");
            }
        }
        if self.thumbnail_max_bytes == 0 || self.video_max_bytes == 0 {
            anyhow::bail!("Upload ceilings must be non-zero");
        }
        if self.thumbnail_allowed_types.is_empty() || self.video_allowed_types.is_empty() {
            anyhow::bail!("Content-type allow-lists must be non-empty");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Return the size ceiling and allow-list for the given asset kind.
    pub fn limits_for(&self, kind: AssetKind) -> UploadLimits {
        match kind {
            AssetKind::Thumbnail => UploadLimits {
                max_bytes: self.thumbnail_max_bytes,
                allowed_types: self.thumbnail_allowed_types.clone(),
            },
            AssetKind::Video => UploadLimits {
                max_bytes: self.video_max_bytes,
                allowed_types: self.video_allowed_types.clone(),
            },
        }
    }
}
