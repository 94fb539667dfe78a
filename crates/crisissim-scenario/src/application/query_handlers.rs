//! Query handlers for the scenario context.

use crisissim_core::error::DomainError;
use crisissim_core::store::SessionStore;

use crate::domain::session::Session;

/// Retrieves a session by id.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if no session has the id, and any
/// error raised by the store.
pub async fn get_session_by_id(
    session_id: &str,
    store: &dyn SessionStore<Session>,
) -> Result<Session, DomainError> {
    store
        .get(session_id)
        .await?
        .ok_or_else(|| DomainError::SessionNotFound(session_id.to_owned()))
}

/// Returns the number of sessions currently held by the store.
///
/// # Errors
///
/// Returns any error raised by the store.
pub async fn count_sessions(store: &dyn SessionStore<Session>) -> Result<usize, DomainError> {
    store.count().await
}
