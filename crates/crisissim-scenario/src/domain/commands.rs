//! Commands for the scenario context.

use std::collections::BTreeMap;

use crisissim_core::command::Command;
use uuid::Uuid;

use super::session::Customization;

/// Command to generate a new scenario session.
#[derive(Debug, Clone)]
pub struct GenerateScenario {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Requested crisis type; the default template is used when absent or
    /// unknown.
    pub crisis_type: Option<String>,
    /// Caller adjustments.
    pub customization: Customization,
}

impl Command for GenerateScenario {
    fn command_type(&self) -> &'static str {
        "scenario.generate"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to submit a decision to a running session.
#[derive(Debug, Clone)]
pub struct SubmitDecision {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to advance.
    pub session_id: String,
    /// Decision text.
    pub decision: String,
    /// Acting role.
    pub role: Option<String>,
    /// Per-role decisions.
    pub role_decisions: BTreeMap<String, String>,
}

impl Command for SubmitDecision {
    fn command_type(&self) -> &'static str {
        "scenario.submit_decision"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn target_session(&self) -> Option<&str> {
        Some(&self.session_id)
    }
}
