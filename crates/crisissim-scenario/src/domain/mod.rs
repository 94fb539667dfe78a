//! Domain model: templates, sessions, and the rules that shape them.

pub mod analytics;
pub mod catalog;
pub mod commands;
pub mod consequences;
pub mod environment;
pub mod session;
