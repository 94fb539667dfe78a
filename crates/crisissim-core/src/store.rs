//! Session store abstraction.
//!
//! The store is generic over the record it holds so this crate stays free of
//! scenario types; the scenario context instantiates it with its `Session`
//! aggregate. Implementations must be object safe so the HTTP layer can hold
//! an `Arc<dyn SessionStore<Session>>` and tests can swap in doubles.

use async_trait::async_trait;

use crate::error::DomainError;

/// In-place mutation applied to a stored session while the store holds its
/// lock.
pub type SessionMutator<'a, S> = Box<dyn FnOnce(&mut S) + Send + 'a>;

/// Predicate deciding whether a stored session survives a sweep.
pub type RetainPredicate<'a, S> = &'a (dyn Fn(&S) -> bool + Send + Sync);

/// Keyed storage for live sessions.
#[async_trait]
pub trait SessionStore<S>: Send + Sync
where
    S: Send + Sync + 'static,
{
    /// Inserts `session` under `id`. An existing entry with the same id is
    /// replaced.
    async fn create(&self, id: String, session: S) -> Result<(), DomainError>;

    /// Returns a snapshot of the session stored under `id`.
    async fn get(&self, id: &str) -> Result<Option<S>, DomainError>;

    /// Runs `mutator` against the session stored under `id` and returns a
    /// snapshot of the result, or `None` when no such session exists (the
    /// mutator is then never called).
    async fn update(&self, id: &str, mutator: SessionMutator<'_, S>)
    -> Result<Option<S>, DomainError>;

    /// Removes and returns the session stored under `id`.
    async fn delete(&self, id: &str) -> Result<Option<S>, DomainError>;

    /// Removes every session for which `keep` returns `false` and returns the
    /// removed sessions.
    async fn retain(&self, keep: RetainPredicate<'_, S>) -> Result<Vec<S>, DomainError>;

    /// Returns the number of stored sessions.
    async fn count(&self) -> Result<usize, DomainError>;
}
