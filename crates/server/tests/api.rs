use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use profile::{DataError, MemStorage, NewUser, PhotoRecord, ProfileRecord, Storage, User};
use serde_json::Value;
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

/// Storage whose reads always fail.
struct BrokenStorage;

#[async_trait]
impl Storage for BrokenStorage {
    async fn get_photos(&self) -> Result<Vec<PhotoRecord>, DataError> {
        Err(DataError::PhotosUnavailable("disk on fire".into()))
    }

    async fn get_profile(&self) -> Result<ProfileRecord, DataError> {
        Err(DataError::ProfileUnavailable("disk on fire".into()))
    }

    async fn get_user(&self, _id: u32) -> Result<Option<User>, DataError> {
        Ok(None)
    }

    async fn get_user_by_username(&self, _username: &str) -> Result<Option<User>, DataError> {
        Ok(None)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DataError> {
        Err(DataError::DuplicateUsername(user.username))
    }
}

fn app(storage: Arc<dyn Storage>) -> Router {
    build_router(Arc::new(ServerState::new(ServerConfig::default(), storage)))
}

fn seeded() -> Router {
    app(Arc::new(MemStorage::seeded()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn photos_are_served_in_swipe_order() {
    for uri in ["/photos", "/api/photos"] {
        let (status, body) = get(seeded(), uri).await;
        assert_eq!(status, StatusCode::OK);

        let photos = body.as_array().unwrap();
        assert_eq!(photos.len(), 8);
        let ids: Vec<u64> = photos.iter().map(|p| p["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert_eq!(photos[4]["type"], "professional");
        assert_eq!(photos[0]["name"], "Sergei");
    }
}

#[tokio::test]
async fn profile_has_string_birthdate_and_derived_age() {
    for uri in ["/profile", "/api/profile"] {
        let (status, body) = get(seeded(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["birthdate"].as_str().unwrap().starts_with("1998-05-10T14:00:00"));
        assert!(body["age"].as_u64().unwrap() >= 28);
        assert_eq!(body["interests"].as_array().unwrap().len(), 7);
        assert_eq!(body["socialLinks"].as_array().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn photo_read_failure_is_500_with_message() {
    let (status, body) = get(app(Arc::new(BrokenStorage)), "/photos").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "message": "Failed to fetch photos" }));
}

#[tokio::test]
async fn profile_read_failure_is_500_with_message() {
    let (status, body) = get(app(Arc::new(BrokenStorage)), "/api/profile").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "message": "Failed to fetch profile" }));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, body) = get(seeded(), "/likes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Not found");
}

#[tokio::test]
async fn readiness_follows_storage() {
    let (status, body) = get(seeded(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deck_size"], 8);

    let (status, _) = get(app(Arc::new(BrokenStorage)), "/ready").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_and_info_are_up() {
    let (status, body) = get(seeded(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(seeded(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "SwipeCard Server");
}

#[tokio::test]
async fn metrics_without_recorder_is_404() {
    let (status, _) = get(seeded(), "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn request_id_is_echoed() {
    let response = seeded()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}
