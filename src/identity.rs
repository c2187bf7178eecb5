//! Email -> user id cache.
//!
//! Emails are immutable identity keys, so a positive entry is never
//! invalidated. Misses are resolved under a single fill lock with a second
//! check, which collapses a burst of concurrent misses for the same email into
//! one store query. Not-found results are not cached.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError, RwLock};

use crate::db::Store;
use crate::error::ResolveError;

#[derive(Debug, Default)]
pub struct IdentityCache {
    entries: RwLock<HashMap<String, String>>,
    /// Held for the duration of one store query + one insert
    fill: Mutex<()>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, store: &dyn Store, email: &str) -> Result<String, ResolveError> {
        if let Some(user_id) = self.cached(email) {
            return Ok(user_id);
        }

        let _fill = self.fill.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have filled it while we waited for the lock
        if let Some(user_id) = self.cached(email) {
            return Ok(user_id);
        }

        let user_id = store
            .find_user_id_by_email(email)?
            .ok_or_else(|| ResolveError::NotFound(email.to_string()))?;

        tracing::debug!("Cached user id for {}", email);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(email.to_string(), user_id.clone());

        Ok(user_id)
    }

    fn cached(&self, email: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(email)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
