//! Upload pipeline integration tests.
//!
//! Run with: `cargo test -p cliphouse-api --test upload_test`

mod helpers;

use helpers::{file_form, setup_test_app, url_basename};
use uuid::Uuid;

#[tokio::test]
async fn test_thumbnail_upload_happy_path() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;
    let token = app.token_for(owner);

    let body = vec![0xAB_u8; 2048];
    let response = app
        .client()
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(file_form("thumbnail", body.clone(), "shot.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 200);
    let record: serde_json::Value = response.json();
    let thumbnail_url = record["thumbnail_url"]
        .as_str()
        .expect("thumbnail_url must be set");
    assert!(thumbnail_url.starts_with("http://localhost:8091/assets/"));
    assert!(thumbnail_url.ends_with(".png"));

    // The persisted bytes resolve through the public asset route and equal
    // the uploaded bytes.
    let served = app
        .client()
        .get(&format!("/assets/{}", url_basename(thumbnail_url)))
        .await;
    assert_eq!(served.status_code(), 200);
    assert_eq!(served.as_bytes().to_vec(), body);

    // And the record store saw the update.
    let stored = app.store.fetch(video.id).await.unwrap();
    assert_eq!(stored.thumbnail_url.as_deref(), Some(thumbnail_url));
    assert!(stored.video_url.is_none());
}

#[tokio::test]
async fn test_video_upload_happy_path() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;
    let token = app.token_for(owner);

    let body: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
    let response = app
        .client()
        .post(&format!("/api/videos/{}/video", video.id))
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(file_form("video", body.clone(), "clip.mp4", "video/mp4"))
        .await;

    assert_eq!(response.status_code(), 200);
    let record: serde_json::Value = response.json();
    let video_url = record["video_url"].as_str().expect("video_url must be set");
    assert!(video_url.contains("/videos/"));
    assert!(video_url.ends_with(".mp4"));

    // The object store (local backend in tests) holds exactly the uploaded
    // bytes under the generated key.
    let stored_path = app.assets_root.join("videos").join(url_basename(video_url));
    let stored_bytes = std::fs::read(&stored_path).expect("stored object must exist");
    assert_eq!(stored_bytes, body);

    let stored = app.store.fetch(video.id).await.unwrap();
    assert_eq!(stored.video_url.as_deref(), Some(video_url));
}

#[tokio::test]
async fn test_thumbnail_rejects_unsupported_type() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;
    let token = app.token_for(owner);

    let response = app
        .client()
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(file_form("thumbnail", vec![0u8; 128], "anim.gif", "image/gif"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "UNSUPPORTED_MEDIA_TYPE");

    // Nothing persisted, record untouched.
    assert_eq!(app.persisted_file_count(), 0);
    let stored = app.store.fetch(video.id).await.unwrap();
    assert!(stored.thumbnail_url.is_none());
}

#[tokio::test]
async fn test_thumbnail_rejects_oversize_payload() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;
    let token = app.token_for(owner);

    // Twice the test ceiling.
    let body = vec![0u8; helpers::TEST_THUMBNAIL_MAX_BYTES * 2];
    let response = app
        .client()
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(file_form("thumbnail", body, "big.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 413);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");

    assert_eq!(app.persisted_file_count(), 0);
    let stored = app.store.fetch(video.id).await.unwrap();
    assert!(stored.thumbnail_url.is_none());
}

#[tokio::test]
async fn test_video_rejects_oversize_payload() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;
    let token = app.token_for(owner);

    let body = vec![0u8; helpers::TEST_VIDEO_MAX_BYTES * 2];
    let response = app
        .client()
        .post(&format!("/api/videos/{}/video", video.id))
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(file_form("video", body, "big.mp4", "video/mp4"))
        .await;

    assert_eq!(response.status_code(), 413);
    assert_eq!(app.persisted_file_count(), 0);
}

#[tokio::test]
async fn test_missing_token_never_reaches_staging() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let response = app
        .client()
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .multipart(file_form("thumbnail", vec![0u8; 512], "shot.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(app.persisted_file_count(), 0);
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let response = app
        .client()
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", "Bearer not-a-real-token")
        .multipart(file_form("thumbnail", vec![0u8; 512], "shot.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 401);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(app.persisted_file_count(), 0);
}

#[tokio::test]
async fn test_non_owner_cannot_attach_media() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;
    let intruder_token = app.token_for(Uuid::new_v4());

    let response = app
        .client()
        .post(&format!("/api/videos/{}/video", video.id))
        .add_header("Authorization", format!("Bearer {}", intruder_token))
        .multipart(file_form("video", vec![0u8; 512], "clip.mp4", "video/mp4"))
        .await;

    assert_eq!(response.status_code(), 401);

    // Record and storage untouched.
    assert_eq!(app.persisted_file_count(), 0);
    let stored = app.store.fetch(video.id).await.unwrap();
    assert!(stored.video_url.is_none());
    assert_eq!(stored.updated_at, video.updated_at);
}

#[tokio::test]
async fn test_ownership_enforced_for_thumbnails_too() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;
    let intruder_token = app.token_for(Uuid::new_v4());

    let response = app
        .client()
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", intruder_token))
        .multipart(file_form("thumbnail", vec![0u8; 512], "shot.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(app.persisted_file_count(), 0);
}

#[tokio::test]
async fn test_unknown_record_is_404() {
    let app = setup_test_app().await;
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .client()
        .post(&format!("/api/videos/{}/thumbnail", Uuid::new_v4()))
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(file_form("thumbnail", vec![0u8; 512], "shot.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_missing_file_field_is_400() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;
    let token = app.token_for(owner);

    // Wrong field name: the form carries "file", the endpoint wants "thumbnail".
    let response = app
        .client()
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(file_form("file", vec![0u8; 512], "shot.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_generated_keys_are_distinct_across_uploads() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;
    let token = app.token_for(owner);

    let mut urls = Vec::new();
    for _ in 0..2 {
        let response = app
            .client()
            .post(&format!("/api/videos/{}/thumbnail", video.id))
            .add_header("Authorization", format!("Bearer {}", token))
            .multipart(file_form("thumbnail", vec![1u8; 256], "shot.png", "image/png"))
            .await;
        assert_eq!(response.status_code(), 200);
        let record: serde_json::Value = response.json();
        urls.push(record["thumbnail_url"].as_str().unwrap().to_string());
    }

    assert_ne!(urls[0], urls[1]);
}

#[tokio::test]
async fn test_get_video_record() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;
    let token = app.token_for(owner);

    let response = app
        .client()
        .get(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    assert_eq!(response.status_code(), 200);
    let record: serde_json::Value = response.json();
    assert_eq!(record["id"].as_str().unwrap(), video.id.to_string());
    assert_eq!(record["title"].as_str().unwrap(), "integration clip");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = setup_test_app().await;

    let live = app.client().get("/health/live").await;
    assert_eq!(live.status_code(), 200);

    let ready = app.client().get("/health/ready").await;
    assert_eq!(ready.status_code(), 200);
}
