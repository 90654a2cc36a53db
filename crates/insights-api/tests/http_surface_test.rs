//! HTTP-surface tests for the router.
//!
//! These tests exercise paths that are decided before any statement is
//! issued, so the pool is created lazily and no database is needed. Full
//! round trips against a migrated database live in `end_to_end_test.rs`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::json;
use tower::ServiceExt;

use insights_api::{router, AppState};
use insights_db::test_fixtures::DEFAULT_TEST_DATABASE_URL;
use insights_db::Database;

fn lazy_state() -> AppState {
    // connect_lazy never opens a connection; these tests must not reach
    // the pool.
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy(DEFAULT_TEST_DATABASE_URL)
        .expect("pool options are valid");
    AppState::new(Database::new(pool))
}

fn bearer(sub: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "sub": sub }).to_string().as_bytes());
    format!("Bearer {}.{}.signature", header, payload)
}

fn json_request(method: &str, uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_needs_no_authentication() {
    let response = router(lazy_state())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_missing_authorization_is_401_with_error_body() {
    let response = router(lazy_state())
        .oneshot(
            Request::builder()
                .uri("/api/v1/sources")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Not authenticated" })
    );
}

#[tokio::test]
async fn test_malformed_bearer_token_is_401() {
    let response = router(lazy_state())
        .oneshot(
            Request::builder()
                .uri("/api/v1/insights")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Not authenticated" })
    );
}

#[tokio::test]
async fn test_invalid_isbn_is_400_before_any_write() {
    let response = router(lazy_state())
        .oneshot(json_request(
            "POST",
            "/api/v1/sources",
            &bearer("auth0|reader"),
            json!({ "name": "Atomic Habits", "isbn13": "123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("ISBN-13"), "unexpected body: {}", message);
}

#[tokio::test]
async fn test_invalid_email_is_400_before_any_write() {
    let response = router(lazy_state())
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            &bearer("auth0|reader"),
            json!({
                "email": "plainaddress",
                "notificationEnabled": true,
                "notificationFilterTags": []
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Provided email has invalid format"));
}

#[tokio::test]
async fn test_oversized_note_is_400_before_any_write() {
    let response = router(lazy_state())
        .oneshot(json_request(
            "POST",
            "/api/v1/insights",
            &bearer("auth0|reader"),
            json!({ "note": "A".repeat(1001) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
