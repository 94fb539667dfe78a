//! Shared test doubles and utilities for the CrisisSim simulation server.

mod clock;
mod store;

pub use clock::{FixedClock, ManualClock};
pub use store::FailingSessionStore;
