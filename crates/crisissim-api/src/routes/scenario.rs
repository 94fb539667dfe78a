//! Routes for generating and fetching scenario sessions.

use axum::extract::{Path, State};
use axum::{
    Json, Router,
    routing::{get, post},
};
use crisissim_scenario::application::{command_handlers, query_handlers};
use crisissim_scenario::domain::commands;
use crisissim_scenario::domain::session::{Complexity, Customization, Session};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

/// Request body for POST /api/scenario.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScenarioRequest {
    /// Crisis type key; unknown or absent types use the default template.
    #[serde(alias = "type", alias = "crisis_type")]
    pub crisis_type: Option<String>,
    /// Where the crisis takes place.
    pub location: Option<String>,
    /// Kind of building involved.
    #[serde(alias = "building_type")]
    pub building_type: Option<String>,
    /// Number of responders.
    #[serde(alias = "team_size")]
    pub team_size: Option<u32>,
    /// Exercise difficulty.
    pub complexity: Option<Complexity>,
    /// Estimated number of people affected.
    #[serde(alias = "people_affected", alias = "people_count")]
    pub people_affected: Option<u32>,
}

/// Response body for a newly generated scenario.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScenarioResponse {
    /// Always `true`.
    pub success: bool,
    /// Id to submit decisions against.
    pub session_id: String,
    /// The generated session.
    pub scenario: Session,
}

/// Response body for a session lookup.
#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    /// Always `true`.
    pub success: bool,
    /// The requested session.
    pub scenario: Session,
}

/// POST /api/scenario
#[instrument(skip(state, request), fields(crisis_type = request.crisis_type.as_deref()))]
async fn generate_scenario(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateScenarioRequest>,
) -> Result<Json<GenerateScenarioResponse>, ApiError> {
    let command = commands::GenerateScenario {
        correlation_id: Uuid::new_v4(),
        crisis_type: request.crisis_type,
        customization: Customization {
            location: request.location,
            building_type: request.building_type,
            team_size: request.team_size,
            complexity: request.complexity.unwrap_or_default(),
            people_affected: request.people_affected,
        },
    };

    info!(correlation_id = %command.correlation_id, "handling generate_scenario command");

    let session = command_handlers::handle_generate_scenario(
        &command,
        &state.catalog,
        state.clock.as_ref(),
        &*state.session_store,
        &state.analytics,
    )
    .await?;

    Ok(Json(GenerateScenarioResponse {
        success: true,
        session_id: session.id.clone(),
        scenario: session,
    }))
}

/// GET /api/scenario/{id}
#[instrument(skip(state))]
async fn get_scenario(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ScenarioResponse>, ApiError> {
    let session = query_handlers::get_session_by_id(&session_id, &*state.session_store).await?;
    Ok(Json(ScenarioResponse {
        success: true,
        scenario: session,
    }))
}

/// Returns the router for scenario generation and lookup, including the
/// legacy `/generate-scenario` and `/scenario/{id}` paths.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/scenario", post(generate_scenario))
        .route("/generate-scenario", post(generate_scenario))
        .route("/api/scenario/{id}", get(get_scenario))
        .route("/scenario/{id}", get(get_scenario))
}
