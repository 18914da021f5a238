//! Application state.
//!
//! Everything a handler needs, built once at startup: the immutable
//! configuration, the JWT verifier, the record store, and one storage
//! backend per asset kind.

use crate::auth::JwtService;
use cliphouse_core::models::AssetKind;
use cliphouse_core::Config;
use cliphouse_db::VideoStore;
use cliphouse_storage::Storage;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub jwt: JwtService,
    pub videos: Arc<dyn VideoStore>,
    pub thumbnail_storage: Arc<dyn Storage>,
    pub video_storage: Arc<dyn Storage>,
}

impl AppState {
    /// The storage backend responsible for the given asset kind.
    pub fn storage_for(&self, kind: AssetKind) -> &Arc<dyn Storage> {
        match kind {
            AssetKind::Thumbnail => &self.thumbnail_storage,
            AssetKind::Video => &self.video_storage,
        }
    }
}
