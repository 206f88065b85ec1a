use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{Session, User};
use crate::session::{self, Entries, SessionStore, StoreError};

/// In-memory SessionStore for testing and native builds.
///
/// Clones share the same map, mirroring how every page of an origin sees the
/// same `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Entries for MemoryStore {
    fn get_entry(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set_entry(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_entry(&self, key: &str) -> Result<(), StoreError> {
        self.entries().remove(key);
        Ok(())
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, token: &str, user: &User) -> Result<(), StoreError> {
        session::write(self, token, user)
    }

    fn load(&self) -> Option<Session> {
        session::read(self)
    }

    fn clear(&self) {
        session::erase(self);
    }
}
