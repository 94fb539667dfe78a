//! Test stores — `SessionStore` doubles for error-path tests.

use std::marker::PhantomData;

use async_trait::async_trait;
use crisissim_core::error::DomainError;
use crisissim_core::store::{RetainPredicate, SessionMutator, SessionStore};

/// A session store that fails every operation with an infrastructure error.
/// Useful for testing how handlers and routes surface storage failures.
#[derive(Debug)]
pub struct FailingSessionStore<S> {
    _record: PhantomData<fn() -> S>,
}

impl<S> FailingSessionStore<S> {
    /// Creates a new failing store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<S> Default for FailingSessionStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn unavailable() -> DomainError {
    DomainError::Infrastructure("session store unavailable".into())
}

#[async_trait]
impl<S> SessionStore<S> for FailingSessionStore<S>
where
    S: Send + Sync + 'static,
{
    async fn create(&self, _id: String, _session: S) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn get(&self, _id: &str) -> Result<Option<S>, DomainError> {
        Err(unavailable())
    }

    async fn update(
        &self,
        _id: &str,
        _mutator: SessionMutator<'_, S>,
    ) -> Result<Option<S>, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &str) -> Result<Option<S>, DomainError> {
        Err(unavailable())
    }

    async fn retain(&self, _keep: RetainPredicate<'_, S>) -> Result<Vec<S>, DomainError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Err(unavailable())
    }
}
