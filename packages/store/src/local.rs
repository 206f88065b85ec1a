//! # localStorage session store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the **web platform**. It
//! keeps the session in the origin's `window.localStorage`, so it survives page
//! reloads and is shared by every page of the site, but not across origins.
//!
//! ## Error handling
//!
//! Reads swallow errors: an unavailable storage area (private browsing, disabled
//! storage) reads as "no session" and the visitor is treated as logged out.
//! Writes report [`StoreError::Unavailable`] so the login form can tell the
//! user the session could not be kept.

use web_sys::Storage;

use crate::models::{Session, User};
use crate::session::{self, Entries, SessionStore, StoreError};

/// `window.localStorage`-backed SessionStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(unavailable)?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

fn unavailable(e: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(format!("{e:?}"))
}

impl Entries for Storage {
    fn get_entry(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn set_entry(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.set_item(key, value).map_err(unavailable)
    }

    fn remove_entry(&self, key: &str) -> Result<(), StoreError> {
        self.remove_item(key).map_err(unavailable)
    }
}

impl SessionStore for LocalStorageStore {
    fn save(&self, token: &str, user: &User) -> Result<(), StoreError> {
        session::write(&Self::storage()?, token, user)
    }

    fn load(&self) -> Option<Session> {
        session::read(&Self::storage().ok()?)
    }

    fn clear(&self) {
        if let Ok(storage) = Self::storage() {
            session::erase(&storage);
        }
    }
}
