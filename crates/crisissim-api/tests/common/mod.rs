//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use crisissim_core::clock::Clock;
use crisissim_core::store::SessionStore;
use crisissim_scenario::domain::catalog::TemplateCatalog;
use crisissim_scenario::domain::session::Session;
use crisissim_session_store::InMemorySessionStore;
use crisissim_test_support::FixedClock;
use http_body_util::BodyExt;
use tower::ServiceExt;

use crisissim_api::routes;
use crisissim_api::state::AppState;

/// Fixed timestamp used across all integration tests.
pub fn fixed_now() -> DateTime<Utc> {
    chrono::TimeZone::with_ymd_and_hms(&Utc, 2026, 1, 15, 10, 0, 0).unwrap()
}

/// Application state with an empty in-memory store and the given clock.
pub fn test_state_with_clock(clock: Arc<dyn Clock + Send + Sync>) -> AppState {
    let session_store: Arc<dyn SessionStore<Session>> =
        Arc::new(InMemorySessionStore::<Session>::new());
    AppState::new(
        clock,
        session_store,
        Arc::new(TemplateCatalog::builtin().unwrap()),
    )
}

/// Application state with an empty in-memory store and a fixed clock.
pub fn test_state() -> AppState {
    test_state_with_clock(Arc::new(FixedClock(fixed_now())))
}

/// Build the full app router over `state`. Uses the same route structure as
/// `main.rs`.
pub fn build_test_app(state: AppState) -> Router {
    routes::router().with_state(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Generate a scenario of `crisis_type` and return its session id.
pub async fn generate(state: &AppState, crisis_type: &str) -> String {
    let (status, json) = post_json(
        build_test_app(state.clone()),
        "/api/scenario",
        &serde_json::json!({ "crisisType": crisis_type }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["sessionId"].as_str().unwrap().to_owned()
}

/// Submit `decision` to `session_id` and return the response.
pub async fn decide(
    state: &AppState,
    session_id: &str,
    decision: &str,
) -> (StatusCode, serde_json::Value) {
    post_json(
        build_test_app(state.clone()),
        "/api/decision",
        &serde_json::json!({ "sessionId": session_id, "decision": decision }),
    )
    .await
}
