//! OpenAPI document aggregation.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::thumbnail_upload::upload_thumbnail,
        crate::handlers::video_upload::upload_video,
        crate::handlers::video_get::get_video,
    ),
    components(schemas(
        cliphouse_core::models::VideoResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Video records and media upload")
    )
)]
pub struct ApiDoc;
