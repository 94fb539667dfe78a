//! HTTP route modules.

use axum::Router;

use crate::state::AppState;

pub mod analytics;
pub mod decision;
pub mod demo;
pub mod health;
pub mod scenario;

/// Returns the full application router (without middleware layers).
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(scenario::router())
        .merge(decision::router())
        .merge(analytics::router())
        .merge(demo::router())
}
