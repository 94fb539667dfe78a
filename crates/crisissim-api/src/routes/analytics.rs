//! Analytics endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use crisissim_scenario::domain::analytics::AnalyticsSnapshot;
use serde::Serialize;

use crate::state::AppState;

/// Analytics response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    /// Raw counters.
    #[serde(flatten)]
    pub counters: AnalyticsSnapshot,
    /// Mean decisions per generated scenario.
    pub average_decisions_per_scenario: f64,
    /// Number of crisis templates available.
    pub available_templates: usize,
}

/// GET /analytics
async fn analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    let counters = state.analytics.snapshot();
    Json(AnalyticsResponse {
        counters,
        average_decisions_per_scenario: counters.average_decisions_per_scenario(),
        available_templates: state.catalog.len(),
    })
}

/// Returns the analytics router.
pub fn router() -> Router<AppState> {
    Router::new().route("/analytics", get(analytics))
}
