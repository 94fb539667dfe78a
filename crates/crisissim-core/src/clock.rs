//! Clock abstraction for deterministic timestamps and session ageing.

use chrono::{DateTime, TimeDelta, Utc};

/// Abstraction over system time.
///
/// Session creation stamps, decision timestamps and the reaper's age
/// calculation all read time through this trait so tests can pin or advance
/// it explicitly.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns how much time has passed since `earlier`.
    ///
    /// Negative when `earlier` lies in the future of this clock.
    fn since(&self, earlier: DateTime<Utc>) -> TimeDelta {
        self.now() - earlier
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
