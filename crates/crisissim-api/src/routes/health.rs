//! Health check endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use crisissim_scenario::application::query_handlers;
use crisissim_scenario::domain::analytics::AnalyticsSnapshot;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Time of the check.
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server started.
    pub uptime_seconds: i64,
    /// Sessions currently held in memory.
    pub active_sessions: usize,
    /// Service version.
    pub version: &'static str,
    /// Counter snapshot.
    pub analytics: AnalyticsSnapshot,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let active_sessions = query_handlers::count_sessions(&*state.session_store).await?;
    let timestamp = state.clock.now();

    Ok(Json(HealthResponse {
        status: "healthy",
        timestamp,
        uptime_seconds: (timestamp - state.started_at).num_seconds(),
        active_sessions,
        version: env!("CARGO_PKG_VERSION"),
        analytics: state.analytics.snapshot(),
    }))
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
