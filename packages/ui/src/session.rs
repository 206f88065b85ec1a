//! Shared session store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate storage:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Native** (tests, tooling): one process-wide [`store::MemoryStore`]

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
use std::sync::LazyLock;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
static NATIVE_STORE: LazyLock<store::MemoryStore> = LazyLock::new(store::MemoryStore::new);

/// Create the platform-appropriate session store.
pub fn make_session_store() -> impl store::SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        NATIVE_STORE.clone()
    }
}
