//! Routes for submitting decisions to a running session.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::{Json, Router, routing::post};
use crisissim_scenario::application::command_handlers;
use crisissim_scenario::domain::commands;
use crisissim_scenario::domain::session::Session;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

/// Request body for POST /api/decision.
///
/// `sessionId` and `decision` are optional at the serde level so that a
/// missing value is reported as a 400 validation error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    /// Session to advance.
    #[serde(alias = "scenarioId", alias = "scenario_id", alias = "session_id")]
    pub session_id: Option<String>,
    /// Decision text.
    #[serde(alias = "action")]
    pub decision: Option<String>,
    /// Acting role.
    pub role: Option<String>,
    /// Additional per-role decisions.
    #[serde(default, alias = "role_decisions")]
    pub role_decisions: BTreeMap<String, String>,
}

/// Response body for an accepted decision.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResponse {
    /// Always `true`.
    pub success: bool,
    /// The session after the decision.
    pub scenario: Session,
    /// Consequences of the decision.
    pub consequences: Vec<String>,
    /// Whether the session has completed.
    pub is_complete: bool,
}

/// POST /api/decision
#[instrument(skip(state, request), fields(session_id = request.session_id.as_deref()))]
async fn submit_decision(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<DecisionRequest>,
) -> Result<Json<DecisionResponse>, ApiError> {
    let command = commands::SubmitDecision {
        correlation_id: Uuid::new_v4(),
        session_id: request.session_id.unwrap_or_default(),
        decision: request.decision.unwrap_or_default(),
        role: request.role,
        role_decisions: request.role_decisions,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_decision command");

    let result = command_handlers::handle_submit_decision(
        &command,
        &state.catalog,
        state.clock.as_ref(),
        &*state.session_store,
        &state.analytics,
    )
    .await?;

    Ok(Json(DecisionResponse {
        success: true,
        scenario: result.session,
        consequences: result.consequences,
        is_complete: result.is_complete,
    }))
}

/// Returns the router for decisions, including the legacy `/next-step` path.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/decision", post(submit_decision))
        .route("/next-step", post(submit_decision))
}
