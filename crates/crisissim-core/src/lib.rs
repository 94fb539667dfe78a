//! Shared abstractions for the CrisisSim backend.
//!
//! This crate defines the traits and error types that the scenario context,
//! the session store, and the HTTP layer all depend on. It contains no
//! infrastructure code and knows nothing about crisis templates.

pub mod clock;
pub mod command;
pub mod error;
pub mod store;
