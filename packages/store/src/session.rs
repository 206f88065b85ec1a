//! # SessionStore: the persisted `{token, user}` record
//!
//! All reads and writes of the session go through the [`SessionStore`] trait so
//! the same guard, form and view logic works against browser `localStorage`
//! ([`crate::LocalStorageStore`]) or an in-memory map ([`crate::MemoryStore`]).
//!
//! ## Storage layout
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | the opaque bearer token |
//! | [`USER_KEY`] (`"user"`) | the [`User`] serialised as JSON |
//!
//! Both backends are plain string maps behind [`Entries`] and share the code
//! below, so a malformed `user` entry degrades to "no session" the same way
//! everywhere.
//!
//! ## Write order
//!
//! [`write`] removes the old token, writes the user, then writes the new token.
//! If any step fails the stored token is gone, so `load()` sees no session
//! instead of a token paired with another user.

use crate::models::{Session, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to encode user: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persistence for the current session.
pub trait SessionStore {
    /// Persist `token` and `user`, replacing any previous session.
    fn save(&self, token: &str, user: &User) -> Result<(), StoreError>;

    /// The stored session, or `None` if absent or unreadable.
    fn load(&self) -> Option<Session>;

    /// Remove both entries. Safe to call when nothing is stored.
    fn clear(&self);
}

/// String key-value storage a session is kept in.
pub(crate) trait Entries {
    fn get_entry(&self, key: &str) -> Option<String>;
    fn set_entry(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_entry(&self, key: &str) -> Result<(), StoreError>;
}

/// Replace the stored session with `token` and `user`.
pub(crate) fn write(entries: &impl Entries, token: &str, user: &User) -> Result<(), StoreError> {
    let user = serde_json::to_string(user)?;
    entries.remove_entry(TOKEN_KEY)?;
    entries.set_entry(USER_KEY, &user)?;
    if let Err(e) = entries.set_entry(TOKEN_KEY, token) {
        if let Err(cleanup) = entries.remove_entry(USER_KEY) {
            tracing::warn!("Failed to drop {USER_KEY} after a failed save: {cleanup}");
        }
        return Err(e);
    }
    Ok(())
}

pub(crate) fn read(entries: &impl Entries) -> Option<Session> {
    decode(entries.get_entry(TOKEN_KEY), entries.get_entry(USER_KEY))
}

pub(crate) fn erase(entries: &impl Entries) {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(e) = entries.remove_entry(key) {
            tracing::warn!("Failed to remove {key}: {e}");
        }
    }
}

/// Rebuild a session from the two raw storage entries.
pub(crate) fn decode(token: Option<String>, user: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    let raw = user?;
    match serde_json::from_str::<Option<User>>(&raw) {
        Ok(Some(user)) => Some(Session { token, user }),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("Ignoring unreadable stored user: {e}");
            None
        }
    }
}
