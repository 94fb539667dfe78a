//! Demo endpoint describing the simulator.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

const FEATURES: &[&str] = &[
    "Template-driven crisis scenario generation",
    "Decision consequences that react to tone and role",
    "Multi-role team assignment",
    "Building and location environment factors",
    "Live simulation analytics",
];

/// Demo response.
#[derive(Debug, Serialize)]
pub struct DemoResponse {
    /// Product name.
    pub title: &'static str,
    /// One-line pitch.
    pub description: &'static str,
    /// Feature list.
    pub features: &'static [&'static str],
    /// Crisis types that can be requested.
    pub scenarios: Vec<String>,
    /// Readiness note.
    pub status: &'static str,
}

/// GET /demo
async fn demo(State(state): State<AppState>) -> Json<DemoResponse> {
    Json(DemoResponse {
        title: "CrisisSim - Crisis Management Simulator",
        description: "Real-time crisis scenario simulation for emergency response training",
        features: FEATURES,
        scenarios: state.catalog.keys().map(str::to_owned).collect(),
        status: "Ready for demo!",
    })
}

/// Returns the demo router.
pub fn router() -> Router<AppState> {
    Router::new().route("/demo", get(demo))
}
