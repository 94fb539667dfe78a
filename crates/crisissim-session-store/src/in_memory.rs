//! `HashMap`-backed implementation of the `SessionStore` trait.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::warn;

use crisissim_core::error::DomainError;
use crisissim_core::store::{RetainPredicate, SessionMutator, SessionStore};

/// Process-local session store.
///
/// Every operation takes the single map lock for its whole duration and never
/// awaits while holding it, so a mutator passed to `update` observes and
/// writes the session atomically with respect to all other operations.
#[derive(Debug)]
pub struct InMemorySessionStore<S> {
    sessions: Mutex<HashMap<String, S>>,
}

impl<S> InMemorySessionStore<S> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, S>>, DomainError> {
        self.sessions
            .lock()
            .map_err(|_| DomainError::Infrastructure("session store lock poisoned".into()))
    }
}

impl<S> Default for InMemorySessionStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> SessionStore<S> for InMemorySessionStore<S>
where
    S: Clone + Send + Sync + 'static,
{
    async fn create(&self, id: String, session: S) -> Result<(), DomainError> {
        let mut sessions = self.lock()?;
        if sessions.insert(id.clone(), session).is_some() {
            warn!(session_id = %id, "session id collision, previous session overwritten");
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<S>, DomainError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn update(
        &self,
        id: &str,
        mutator: SessionMutator<'_, S>,
    ) -> Result<Option<S>, DomainError> {
        let mut sessions = self.lock()?;
        let Some(session) = sessions.get_mut(id) else {
            return Ok(None);
        };
        mutator(session);
        Ok(Some(session.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<S>, DomainError> {
        Ok(self.lock()?.remove(id))
    }

    async fn retain(&self, keep: RetainPredicate<'_, S>) -> Result<Vec<S>, DomainError> {
        let mut sessions = self.lock()?;
        let expired: Vec<String> = sessions
            .iter()
            .filter(|(_, session)| !keep(session))
            .map(|(id, _)| id.clone())
            .collect();
        Ok(expired
            .iter()
            .filter_map(|id| sessions.remove(id))
            .collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.len())
    }
}
