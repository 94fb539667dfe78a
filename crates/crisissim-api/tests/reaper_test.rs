//! Integration tests for the session reaper.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use chrono::TimeDelta;
use crisissim_api::error::AppError;
use crisissim_api::reaper;
use crisissim_core::clock::Clock;
use crisissim_core::store::SessionStore;
use crisissim_test_support::ManualClock;

#[tokio::test]
async fn test_sweep_evicts_only_stale_sessions() {
    // Arrange
    let clock = Arc::new(ManualClock::new(common::fixed_now()));
    let shared: Arc<dyn Clock + Send + Sync> = clock.clone();
    let state = common::test_state_with_clock(shared);
    let stale = common::generate(&state, "earthquake").await;
    clock.advance(TimeDelta::minutes(90));
    let fresh = common::generate(&state, "flood").await;

    // Act
    let first = reaper::run_sweep(&state, TimeDelta::hours(1)).await.unwrap();
    let second = reaper::run_sweep(&state, TimeDelta::hours(1)).await.unwrap();

    // Assert
    assert_eq!(first.removed, 1);
    assert_eq!(first.removed_active, 1);
    assert_eq!(second.removed, 0);

    let (status, _) = common::get_json(
        common::build_test_app(state.clone()),
        &format!("/scenario/{stale}"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::get_json(
        common::build_test_app(state.clone()),
        &format!("/scenario/{fresh}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = common::get_json(common::build_test_app(state), "/health").await;
    assert_eq!(json["activeSessions"], 1);
    assert_eq!(json["analytics"]["expiredSessions"], 1);
    assert_eq!(json["analytics"]["activeSimulations"], 1);
}

#[tokio::test]
async fn test_spawned_reaper_sweeps_on_its_interval() {
    // Arrange
    let clock = Arc::new(ManualClock::new(common::fixed_now()));
    let shared: Arc<dyn Clock + Send + Sync> = clock.clone();
    let state = common::test_state_with_clock(shared);
    common::generate(&state, "cyber_attack").await;
    clock.advance(TimeDelta::hours(3));

    // Act
    let handle = reaper::spawn_reaper(
        state.clone(),
        Duration::from_millis(10),
        TimeDelta::hours(1),
    )
    .unwrap();
    let mut remaining = usize::MAX;
    for _ in 0..200 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        remaining = state.session_store.count().await.unwrap();
        if remaining == 0 {
            break;
        }
    }
    handle.abort();

    // Assert
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_spawn_reaper_rejects_zero_interval() {
    let state = common::test_state();

    let result = reaper::spawn_reaper(state, Duration::ZERO, TimeDelta::hours(1));

    assert!(matches!(result, Err(AppError::Config(_))));
}
