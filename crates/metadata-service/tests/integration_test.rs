//! Integration tests for the Metadata Service

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use metadata_service::{create_router, AppState};
use mood_art::{FixedClock, GenerationError, MetadataGenerator, MetadataSource, TokenMetadata};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

const NOW_MS: i64 = 1_700_000_000_000;

/// Source whose renderer always fails
struct FailingSource;

impl MetadataSource for FailingSource {
    fn generate(&self, _token_id: &str) -> Result<TokenMetadata, GenerationError> {
        Err(GenerationError::Render("composer unavailable".to_string()))
    }
}

/// Helper to create test app pinned to a fixed instant
fn create_test_app(millis: i64) -> axum::Router {
    let clock = FixedClock::from_millis(millis).unwrap();
    create_router(AppState::new(MetadataGenerator::with_clock(clock, 30_000)))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let (status, json) = get_json(create_test_app(NOW_MS), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "metadata-service");
}

#[tokio::test]
async fn test_metadata_for_token() {
    let (status, json) = get_json(create_test_app(NOW_MS), "/metadata/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Crab Sideways Mood #1");
    assert!(json["description"]
        .as_str()
        .unwrap()
        .ends_with("Rarity: Uncommon"));
    assert!(json["image"]
        .as_str()
        .unwrap()
        .starts_with("data:image/svg+xml;utf8,%3Csvg%20"));

    assert_eq!(
        json["attributes"],
        json!([
            { "trait_type": "Mood", "value": "Crab Sideways" },
            { "trait_type": "Rarity", "value": "Uncommon" },
            { "trait_type": "Energy Level", "value": "Neutral" },
            { "trait_type": "Primary Color", "value": "#ffaa00" },
            { "trait_type": "Has Glow Effect", "value": "Yes" },
            { "trait_type": "Particle System", "value": "None" },
            { "trait_type": "Background Pattern", "value": "waves" },
            { "trait_type": "Frame Style", "value": "Style 3" },
            { "trait_type": "Generation", "value": "2023-11-14" }
        ])
    );
}

#[tokio::test]
async fn test_api_alias_matches() {
    let (_, direct) = get_json(create_test_app(NOW_MS), "/metadata/42").await;
    let (status, alias) = get_json(create_test_app(NOW_MS), "/api/metadata/42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(direct, alias);
    assert_eq!(alias["attributes"][0]["value"], "Bull Run");
}

#[tokio::test]
async fn test_same_window_same_body() {
    let (_, first) = get_json(create_test_app(NOW_MS), "/metadata/8").await;
    let (_, second) = get_json(create_test_app(NOW_MS + 9_999), "/metadata/8").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_non_numeric_token_fails() {
    let (status, json) = get_json(create_test_app(NOW_MS), "/metadata/abc").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Failed to generate metadata" }));
}

#[tokio::test]
async fn test_failing_renderer_yields_error_envelope() {
    let app = create_router(AppState::new(FailingSource));
    let (status, json) = get_json(app, "/metadata/1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Failed to generate metadata" }));
}

#[tokio::test]
async fn test_unknown_route() {
    let response = create_test_app(NOW_MS)
        .oneshot(
            Request::builder()
                .uri("/metadata")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
