//! Domain models.

mod video;

pub use video::{AssetKind, Video, VideoResponse};
