//! In-process router tests.
//!
//! These drive the real router through `tower::ServiceExt::oneshot` with a
//! lazily-connected pool, exercising every path that resolves before the
//! first SQL statement: payload validation, routing, and path parsing.
//! Tests that need a live Postgres (CRUD round-trips, seed checks) live in
//! `tests/live_api.rs` and are `#[ignore]`-marked.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use crate::{router, AppState, LookupMode};

/// Build a state whose pool never connects; validation failures must be
/// produced without touching the database.
fn test_state(lookup_mode: LookupMode) -> AppState {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/acme_hr_test")
        .expect("lazy pool from a well-formed url");
    AppState { pool, lookup_mode }
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

async fn error_envelope(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("error body is JSON")
}

#[test]
fn lookup_mode_defaults_to_permissive() {
    assert_eq!(LookupMode::default(), LookupMode::Permissive);
}

#[tokio::test]
async fn create_with_null_name_is_rejected_before_any_sql() {
    let app = router(test_state(LookupMode::Permissive));
    let request = json_request(
        "POST",
        "/api/employees",
        r#"{"name": null, "department_name": "Avengers"}"#,
    );

    let response = app.oneshot(request).await.expect("router never fails");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = error_envelope(response).await;
    assert!(body["error"].as_str().expect("error message").contains("name"));
}

#[tokio::test]
async fn create_with_missing_name_is_rejected() {
    let app = router(test_state(LookupMode::Permissive));
    let request = json_request("POST", "/api/employees", r#"{"department_name": "Xmen"}"#);

    let response = app.oneshot(request).await.expect("router never fails");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_with_blank_name_is_rejected() {
    let app = router(test_state(LookupMode::Strict));
    let request = json_request("PUT", "/api/employees/1", r#"{"name": "   "}"#);

    let response = app.oneshot(request).await.expect("router never fails");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = error_envelope(response).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn non_numeric_employee_id_is_a_bad_request() {
    let app = router(test_state(LookupMode::Permissive));
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/employees/not-a-number")
        .body(Body::empty())
        .expect("valid request");

    let response = app.oneshot(request).await.expect("router never fails");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = router(test_state(LookupMode::Permissive));
    let request = Request::builder()
        .uri("/api/nope")
        .body(Body::empty())
        .expect("valid request");

    let response = app.oneshot(request).await.expect("router never fails");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn departments_route_rejects_post() {
    let app = router(test_state(LookupMode::Permissive));
    let request = json_request("POST", "/api/departments", r#"{"name": "Fantastic Four"}"#);

    let response = app.oneshot(request).await.expect("router never fails");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
