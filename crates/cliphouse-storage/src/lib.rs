//! Cliphouse Storage Library
//!
//! Storage abstraction and backends for uploaded assets: a local filesystem
//! backend for thumbnails (staged write, atomic rename into the public
//! root) and an S3 backend for videos (single put per object).
//!
//! # Object naming
//!
//! Object names are generated, never client-supplied: a 32-byte random
//! token, URL-safe base64 encoded, joined with the extension derived from
//! the validated content type. Names must not contain `..` or a leading
//! `/`. Naming is centralized in the `keys` module so all backends stay
//! consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use cliphouse_core::StorageBackend;
pub use factory::{create_thumbnail_storage, create_video_storage};
pub use keys::random_object_name;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult, StoredObject};
