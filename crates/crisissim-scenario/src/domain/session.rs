//! The session aggregate: one live simulation derived from a template.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{RoleDefinition, Severity, Template};
use super::consequences::{DecisionContext, derive_consequences};
use super::environment::{ENVIRONMENT_RULES, RoleAssignment, assign_roles, environment_factors};

/// Number of decisions a simulation runs for. The session completes on the
/// decision that moves `turn` past this value.
pub const TOTAL_STEPS: u32 = 5;

/// Largest team a scenario can be generated for.
pub const MAX_TEAM_SIZE: u32 = 50;

/// Role recorded when a decision names none.
pub const UNKNOWN_ROLE: &str = "Unknown";

/// Lifecycle status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Decisions are still expected.
    Active,
    /// The session has passed its final step.
    Completed,
}

/// Requested exercise difficulty. Unrecognized values read as `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Complexity {
    /// Introductory exercise.
    Low,
    /// Standard exercise.
    #[default]
    Medium,
    /// Advanced exercise.
    High,
}

impl From<String> for Complexity {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// Caller-supplied adjustments applied when generating a session.
#[derive(Debug, Clone, Default)]
pub struct Customization {
    /// Where the crisis takes place.
    pub location: Option<String>,
    /// Kind of building involved.
    pub building_type: Option<String>,
    /// Number of responders; defaults to one per template role.
    pub team_size: Option<u32>,
    /// Exercise difficulty.
    pub complexity: Complexity,
    /// Estimated number of people affected.
    pub people_affected: Option<u32>,
}

/// One accepted decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRecord {
    /// Turn the decision was made on.
    pub turn: u32,
    /// Role that made it.
    pub role: String,
    /// Decision text.
    pub decision: String,
    /// Per-role decisions submitted alongside it.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub role_decisions: BTreeMap<String, String>,
    /// When it was accepted.
    pub timestamp: DateTime<Utc>,
}

/// A decision as submitted, before it is accepted.
#[derive(Debug, Clone, Copy)]
pub struct DecisionInput<'a> {
    /// Decision text.
    pub decision: &'a str,
    /// Acting role, if given.
    pub role: Option<&'a str>,
    /// Per-role decisions.
    pub role_decisions: &'a BTreeMap<String, String>,
}

/// Result of applying a decision to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionOutcome {
    /// Consequences derived for this decision.
    pub consequences: Vec<String>,
    /// Whether the session is completed after this decision.
    pub is_complete: bool,
    /// Whether this decision is the one that completed the session.
    pub completed_now: bool,
}

/// A live simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque session identifier.
    pub id: String,
    /// Key of the template this session was generated from.
    pub crisis_type: String,
    /// Scenario title.
    pub title: String,
    /// Scenario description.
    pub description: String,
    /// Severity rating.
    pub severity: Severity,
    /// Suggested time budget.
    pub time_limit_minutes: u32,
    /// Template roles.
    pub roles: Vec<RoleDefinition>,
    /// Actions offered before the first decision.
    pub initial_actions: Vec<String>,
    /// Where the crisis takes place.
    pub location: Option<String>,
    /// Kind of building involved.
    pub building_type: Option<String>,
    /// Number of responders.
    pub team_size: u32,
    /// Exercise difficulty.
    pub complexity: Complexity,
    /// Estimated number of people affected.
    pub people_affected: Option<u32>,
    /// One-sentence briefing built from the customization.
    pub briefing: String,
    /// Notes derived from building type and location.
    pub environment_factors: Vec<String>,
    /// Per-member role assignment.
    pub role_assignments: Vec<RoleAssignment>,
    /// Lifecycle status.
    pub status: SessionStatus,
    /// Current turn, starting at 1.
    pub turn: u32,
    /// Decisions the simulation runs for.
    pub total_steps: u32,
    /// Accepted decisions, in submission order.
    pub decision_log: Vec<DecisionRecord>,
    /// Consequences of the latest decision.
    pub last_consequences: Vec<String>,
    /// Situation after the latest decision.
    pub current_situation: Option<String>,
    /// Actions currently on offer.
    pub available_actions: Vec<String>,
    /// Creation time; drives reaping.
    pub created_at: DateTime<Utc>,
    /// Time of the last change.
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Generates a new active session from `template`.
    ///
    /// Deterministic for identical inputs apart from `id` and `now`.
    #[must_use]
    pub fn generate(
        id: String,
        template: &Template,
        customization: &Customization,
        now: DateTime<Utc>,
    ) -> Self {
        let team_size = customization
            .team_size
            .unwrap_or_else(|| u32::try_from(template.roles.len()).unwrap_or(MAX_TEAM_SIZE));

        Self {
            id,
            crisis_type: template.key.clone(),
            title: template.title.clone(),
            description: template.description.clone(),
            severity: template.severity,
            time_limit_minutes: template.time_limit_minutes,
            roles: template.roles.clone(),
            initial_actions: template.initial_actions.clone(),
            location: customization.location.clone(),
            building_type: customization.building_type.clone(),
            team_size,
            complexity: customization.complexity,
            people_affected: customization.people_affected,
            briefing: briefing(template, customization),
            environment_factors: environment_factors(
                ENVIRONMENT_RULES,
                customization.building_type.as_deref(),
                customization.location.as_deref(),
            ),
            role_assignments: assign_roles(&template.roles, team_size),
            status: SessionStatus::Active,
            turn: 1,
            total_steps: TOTAL_STEPS,
            decision_log: Vec::new(),
            last_consequences: Vec::new(),
            current_situation: None,
            available_actions: template.initial_actions.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the session has passed its final step.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Accepts a decision: logs it, advances the turn, derives consequences,
    /// and completes the session once the turn passes `total_steps`.
    ///
    /// Decisions on a completed session are still accepted; the session stays
    /// completed.
    pub fn record_decision(
        &mut self,
        input: &DecisionInput<'_>,
        template: &Template,
        now: DateTime<Utc>,
    ) -> DecisionOutcome {
        let role = input.role.map(str::trim).filter(|role| !role.is_empty());
        self.decision_log.push(DecisionRecord {
            turn: self.turn,
            role: role.unwrap_or(UNKNOWN_ROLE).to_owned(),
            decision: input.decision.to_owned(),
            role_decisions: input.role_decisions.clone(),
            timestamp: now,
        });
        self.turn += 1;

        let context = DecisionContext {
            decision: input.decision,
            role,
            role_decisions: input.role_decisions,
        };
        let consequences = derive_consequences(&context, &template.consequences);
        self.last_consequences.clone_from(&consequences);
        self.current_situation = Some(template.situation.clone());
        self.available_actions.clone_from(&template.follow_up_actions);
        self.updated_at = now;

        let completed_now = !self.is_complete() && self.turn > self.total_steps;
        if completed_now {
            self.status = SessionStatus::Completed;
        }

        DecisionOutcome {
            consequences,
            is_complete: self.is_complete(),
            completed_now,
        }
    }
}

fn briefing(template: &Template, customization: &Customization) -> String {
    let place = customization
        .location
        .as_deref()
        .map_or_else(String::new, |location| format!(" in {location}"));
    let scale = customization
        .people_affected
        .map_or_else(String::new, |people| {
            format!(", affecting approximately {people} people")
        });
    format!(
        "{}{place}{scale}. The situation requires immediate coordination across {} response roles.",
        template.title,
        template.roles.len()
    )
}
