//! Application services: command handlers, queries, and the session reaper.

pub mod command_handlers;
pub mod query_handlers;
pub mod reaper;
