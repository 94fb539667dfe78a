//! Session reaper: evicts sessions older than a maximum age.
//!
//! The sweep takes the current time as an argument; scheduling it is the
//! host's job.

use chrono::{DateTime, TimeDelta, Utc};
use crisissim_core::error::DomainError;
use crisissim_core::store::SessionStore;
use tracing::debug;

use crate::domain::analytics::SimulationAnalytics;
use crate::domain::session::Session;

/// Outcome of one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Sessions removed.
    pub removed: usize,
    /// Removed sessions that were still active.
    pub removed_active: usize,
}

/// Whether `session` is older than `max_age` at `now`. A session exactly
/// `max_age` old is kept.
#[must_use]
pub fn is_expired(session: &Session, now: DateTime<Utc>, max_age: TimeDelta) -> bool {
    now - session.created_at > max_age
}

/// Removes every session older than `max_age` at `now` and releases the
/// active-simulation count of the removed sessions that had not completed.
///
/// # Errors
///
/// Returns any error raised by the store.
pub async fn sweep_expired_sessions(
    store: &dyn SessionStore<Session>,
    analytics: &SimulationAnalytics,
    now: DateTime<Utc>,
    max_age: TimeDelta,
) -> Result<SweepReport, DomainError> {
    let removed = store
        .retain(&|session: &Session| !is_expired(session, now, max_age))
        .await?;

    let report = SweepReport {
        removed: removed.len(),
        removed_active: removed.iter().filter(|s| !s.is_complete()).count(),
    };
    analytics.record_expired(report.removed as u64, report.removed_active as u64);

    for session in &removed {
        debug!(session_id = %session.id, created_at = %session.created_at, "session expired");
    }

    Ok(report)
}
