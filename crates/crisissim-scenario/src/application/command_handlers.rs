//! Command handlers for the scenario context.
//!
//! Each handler validates its command, resolves the template, mutates the
//! session store, and updates the analytics counters.

use crisissim_core::clock::Clock;
use crisissim_core::command::Command;
use crisissim_core::error::DomainError;
use crisissim_core::store::SessionStore;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::analytics::SimulationAnalytics;
use crate::domain::catalog::TemplateCatalog;
use crate::domain::commands::{GenerateScenario, SubmitDecision};
use crate::domain::session::{DecisionInput, DecisionOutcome, MAX_TEAM_SIZE, Session};

/// Result of a successfully handled decision.
#[derive(Debug)]
pub struct DecisionResult {
    /// The session after the decision was applied.
    pub session: Session,
    /// Consequences derived for the decision.
    pub consequences: Vec<String>,
    /// Whether the session is now completed.
    pub is_complete: bool,
}

fn validate_team_size(team_size: Option<u32>) -> Result<(), DomainError> {
    match team_size {
        Some(size) if size == 0 || size > MAX_TEAM_SIZE => Err(DomainError::Validation(
            format!("teamSize must be between 1 and {MAX_TEAM_SIZE}, got {size}"),
        )),
        _ => Ok(()),
    }
}

/// Handles the `GenerateScenario` command: resolves the template (falling back
/// to the default for unknown types), builds a session, and stores it under a
/// fresh id.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an out-of-range team size, and any
/// error raised by the store.
pub async fn handle_generate_scenario(
    command: &GenerateScenario,
    catalog: &TemplateCatalog,
    clock: &dyn Clock,
    store: &dyn SessionStore<Session>,
    analytics: &SimulationAnalytics,
) -> Result<Session, DomainError> {
    validate_team_size(command.customization.team_size)?;

    let requested = command.crisis_type.as_deref().unwrap_or_default();
    let template = catalog.lookup(requested);
    if command.crisis_type.is_some() && catalog.find(requested).is_none() {
        debug!(
            correlation_id = %command.correlation_id(),
            requested,
            fallback = %template.key,
            "unknown crisis type, using default template"
        );
    }

    let session_id = Uuid::new_v4().to_string();
    let session = Session::generate(
        session_id.clone(),
        template,
        &command.customization,
        clock.now(),
    );
    store.create(session_id.clone(), session.clone()).await?;
    analytics.record_generated();

    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        session_id = %session_id,
        crisis_type = %session.crisis_type,
        "scenario generated"
    );

    Ok(session)
}

/// Handles the `SubmitDecision` command: applies the decision to the stored
/// session under the store's lock and reports its consequences.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the session id or decision is blank,
/// `DomainError::SessionNotFound` if no session has the id, and any error
/// raised by the store.
pub async fn handle_submit_decision(
    command: &SubmitDecision,
    catalog: &TemplateCatalog,
    clock: &dyn Clock,
    store: &dyn SessionStore<Session>,
    analytics: &SimulationAnalytics,
) -> Result<DecisionResult, DomainError> {
    let session_id = command.session_id.trim();
    if session_id.is_empty() {
        return Err(DomainError::Validation("sessionId is required".into()));
    }
    let decision = command.decision.trim();
    if decision.is_empty() {
        return Err(DomainError::Validation("decision is required".into()));
    }

    let input = DecisionInput {
        decision,
        role: command.role.as_deref(),
        role_decisions: &command.role_decisions,
    };
    let now = clock.now();
    let mut outcome: Option<DecisionOutcome> = None;

    let updated = store
        .update(
            session_id,
            Box::new(|session: &mut Session| {
                let template = catalog.lookup(&session.crisis_type);
                outcome = Some(session.record_decision(&input, template, now));
            }),
        )
        .await?;

    let Some(session) = updated else {
        return Err(DomainError::SessionNotFound(session_id.to_owned()));
    };
    let outcome = outcome.ok_or_else(|| {
        DomainError::Infrastructure("session store did not apply the decision".into())
    })?;
    analytics.record_decision(outcome.completed_now);

    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        session_id = command.target_session().unwrap_or_default(),
        turn = session.turn,
        completed = outcome.is_complete,
        "decision processed"
    );

    Ok(DecisionResult {
        session,
        consequences: outcome.consequences,
        is_complete: outcome.is_complete,
    })
}
