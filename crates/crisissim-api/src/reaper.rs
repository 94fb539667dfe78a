//! Periodic session reaper task.

use std::time::Duration;

use chrono::TimeDelta;
use crisissim_scenario::application::reaper::{SweepReport, sweep_expired_sessions};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::AppState;

/// Runs one sweep at the state's current clock time. Failures are logged and
/// reported as `None`; the next tick simply tries again.
pub async fn run_sweep(state: &AppState, max_age: TimeDelta) -> Option<SweepReport> {
    let now = state.clock.now();
    match sweep_expired_sessions(&*state.session_store, &state.analytics, now, max_age).await {
        Ok(report) => {
            info!(
                removed = report.removed,
                removed_active = report.removed_active,
                "swept expired sessions"
            );
            Some(report)
        }
        Err(err) => {
            warn!(error = %err, "session sweep failed");
            None
        }
    }
}

/// Spawns a task sweeping expired sessions every `every`, starting one full
/// interval after the call.
///
/// # Errors
///
/// Returns `AppError::Config` if `every` is zero.
pub fn spawn_reaper(
    state: AppState,
    every: Duration,
    max_age: TimeDelta,
) -> Result<JoinHandle<()>, AppError> {
    if every.is_zero() {
        return Err(AppError::Config(
            "reaper interval must be greater than zero".into(),
        ));
    }
    Ok(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            run_sweep(&state, max_age).await;
        }
    }))
}
