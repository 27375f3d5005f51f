//! Integration tests for the HTTP service.
//!
//! The router runs in-process via `tower::ServiceExt::oneshot` with a fake
//! provider, so no network is involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use diary_insights::ai::{CompletionProvider, ContentBlock};
use diary_insights::errors::{AIError, AppResult};
use diary_insights::server::router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Answers every prompt with a fixed reply and counts calls.
#[derive(Clone)]
struct FakeProvider {
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl FakeProvider {
    fn ok() -> Self {
        Self {
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok()
        }
    }
}

impl CompletionProvider for FakeProvider {
    async fn complete(&self, prompt: &str, _max_tokens: u32) -> AppResult<Vec<ContentBlock>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AIError::InvalidResponse("HTTP 500: boom".to_string()).into());
        }
        let count = prompt.matches("Entry ").count();
        Ok(vec![ContentBlock::text(format!("## Summary\n{} entries", count))])
    }
}

async fn post_analyze(provider: FakeProvider, body: &str) -> (StatusCode, Value) {
    let response = router(provider)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_analyze_returns_insights() {
    let provider = FakeProvider::ok();
    let calls = provider.calls.clone();

    let body = json!({"entries": ["Slept badly.", "Ran 5k."]}).to_string();
    let (status, json) = post_analyze(provider, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"insights": "## Summary\n2 entries"}));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalid_entries_are_bad_requests() {
    for body in [
        json!({}),
        json!({"entries": null}),
        json!({"entries": "not an array"}),
        json!({"entries": []}),
        json!({"entries": ["ok", 7]}),
        json!(["top", "level", "array"]),
    ] {
        let provider = FakeProvider::ok();
        let calls = provider.calls.clone();

        let (status, json) = post_analyze(provider, &body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
        assert_eq!(json, json!({"error": "No diary entries provided"}));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn test_provider_failure_is_internal_error() {
    let provider = FakeProvider::failing();
    let calls = provider.calls.clone();

    let (status, json) = post_analyze(provider, r#"{"entries":["A"]}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"error": "Failed to analyze diary entries"}));
    assert_eq!(calls.load(Ordering::SeqCst), 1, "single attempt");
}

#[tokio::test]
async fn test_unparseable_body_is_internal_error() {
    let (status, json) = post_analyze(FakeProvider::ok(), "{entries: oops").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"error": "Failed to analyze diary entries"}));
}

#[tokio::test]
async fn test_health() {
    let response = router(FakeProvider::ok())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["ok"], true);
}

#[tokio::test]
async fn test_get_on_analyze_is_not_allowed() {
    let response = router(FakeProvider::ok())
        .oneshot(
            Request::builder()
                .uri("/api/analyze")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_analyze_accepts_bodies_over_default_limit() {
    let provider = FakeProvider::ok();
    let calls = provider.calls.clone();

    let body = json!({"entries": ["x".repeat(3 * 1024 * 1024)]}).to_string();
    let (status, json) = post_analyze(provider, &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"insights": "## Summary\n1 entries"}));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
