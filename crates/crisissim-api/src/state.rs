//! Shared application state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use crisissim_core::clock::Clock;
use crisissim_core::store::SessionStore;
use crisissim_scenario::domain::analytics::SimulationAnalytics;
use crisissim_scenario::domain::catalog::TemplateCatalog;
use crisissim_scenario::domain::session::Session;

/// Application state shared across all request handlers and the reaper.
#[derive(Clone)]
pub struct AppState {
    /// Clock for timestamps (injectable for determinism).
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Live sessions.
    pub session_store: Arc<dyn SessionStore<Session>>,
    /// Crisis templates, read-only.
    pub catalog: Arc<TemplateCatalog>,
    /// Process-wide counters.
    pub analytics: Arc<SimulationAnalytics>,
    /// When the server started, for uptime reporting.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state with zeroed analytics, stamped with the
    /// clock's current time.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        session_store: Arc<dyn SessionStore<Session>>,
        catalog: Arc<TemplateCatalog>,
    ) -> Self {
        let started_at = clock.now();
        Self {
            clock,
            session_store,
            catalog,
            analytics: Arc::new(SimulationAnalytics::new()),
            started_at,
        }
    }
}
