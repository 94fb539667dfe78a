//! Process-wide simulation counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters shared by the handlers and the reaper.
#[derive(Debug, Default)]
pub struct SimulationAnalytics {
    scenarios_generated: AtomicU64,
    decisions_processed: AtomicU64,
    active_simulations: AtomicU64,
    completed_simulations: AtomicU64,
    expired_sessions: AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    /// Sessions generated since start-up.
    pub scenarios_generated: u64,
    /// Decisions accepted since start-up.
    pub decisions_processed: u64,
    /// Sessions currently active.
    pub active_simulations: u64,
    /// Sessions that reached their final step.
    pub completed_simulations: u64,
    /// Sessions removed by the reaper.
    pub expired_sessions: u64,
}

impl SimulationAnalytics {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly generated, active session.
    pub fn record_generated(&self) {
        self.scenarios_generated.fetch_add(1, Ordering::Relaxed);
        self.active_simulations.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an accepted decision; `completed_now` marks the decision that
    /// finished its session.
    pub fn record_decision(&self, completed_now: bool) {
        self.decisions_processed.fetch_add(1, Ordering::Relaxed);
        if completed_now {
            self.completed_simulations.fetch_add(1, Ordering::Relaxed);
            self.release_active(1);
        }
    }

    /// Records sessions removed by the reaper, `active` of which had not
    /// completed.
    pub fn record_expired(&self, removed: u64, active: u64) {
        self.expired_sessions.fetch_add(removed, Ordering::Relaxed);
        self.release_active(active);
    }

    fn release_active(&self, count: u64) {
        // Saturating: never wraps below zero.
        let _ = self
            .active_simulations
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                Some(current.saturating_sub(count))
            });
    }

    /// Returns the current counter values.
    #[must_use]
    pub fn snapshot(&self) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            scenarios_generated: self.scenarios_generated.load(Ordering::Relaxed),
            decisions_processed: self.decisions_processed.load(Ordering::Relaxed),
            active_simulations: self.active_simulations.load(Ordering::Relaxed),
            completed_simulations: self.completed_simulations.load(Ordering::Relaxed),
            expired_sessions: self.expired_sessions.load(Ordering::Relaxed),
        }
    }
}

impl AnalyticsSnapshot {
    /// Mean number of decisions per generated scenario.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_decisions_per_scenario(&self) -> f64 {
        if self.scenarios_generated == 0 {
            0.0
        } else {
            self.decisions_processed as f64 / self.scenarios_generated as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_and_completed_move_active_count() {
        let analytics = SimulationAnalytics::new();

        analytics.record_generated();
        analytics.record_generated();
        analytics.record_decision(false);
        analytics.record_decision(true);

        let snapshot = analytics.snapshot();
        assert_eq!(snapshot.scenarios_generated, 2);
        assert_eq!(snapshot.decisions_processed, 2);
        assert_eq!(snapshot.active_simulations, 1);
        assert_eq!(snapshot.completed_simulations, 1);
        assert!((snapshot.average_decisions_per_scenario() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_expired_releases_active_without_underflow() {
        let analytics = SimulationAnalytics::new();
        analytics.record_generated();

        analytics.record_expired(3, 2);

        let snapshot = analytics.snapshot();
        assert_eq!(snapshot.expired_sessions, 3);
        assert_eq!(snapshot.active_simulations, 0);
    }

    #[test]
    fn test_average_is_zero_without_scenarios() {
        let average = SimulationAnalytics::new()
            .snapshot()
            .average_decisions_per_scenario();

        assert!(average.abs() < f64::EPSILON);
    }
}
