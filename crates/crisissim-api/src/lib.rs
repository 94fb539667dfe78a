//! CrisisSim HTTP API.
//!
//! Exposes scenario generation, decision processing, session lookup, health,
//! analytics, and demo endpoints over JSON, and hosts the periodic session
//! reaper.

pub mod config;
pub mod error;
pub mod reaper;
pub mod routes;
pub mod state;
