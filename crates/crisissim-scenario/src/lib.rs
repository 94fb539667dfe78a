//! Scenario context: crisis templates, sessions, and decision processing.
//!
//! Responsible for the template catalog, generating sessions from templates,
//! processing decisions into consequences, and reaping stale sessions.

pub mod application;
pub mod domain;
