//! Command abstractions.

use uuid::Uuid;

/// Trait that all commands implement.
///
/// Commands are the inputs of the scenario context's application handlers.
/// The HTTP layer builds one per request and the handlers use these accessors
/// to tag their log lines.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// The type name for this command (for logging).
    fn command_type(&self) -> &'static str;

    /// Correlation ID to trace this command through the system.
    fn correlation_id(&self) -> Uuid;

    /// The session the command targets, if it addresses an existing one.
    fn target_session(&self) -> Option<&str> {
        None
    }
}
