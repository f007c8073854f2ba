//! Shared session constructor for all platforms.
//!
//! Returns an [`api::Session`] persisted in the appropriate [`store::SlotStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Native**: an in-memory [`store::MemoryStore`]; nothing survives a restart

/// Restore the session left by a previous page load, if any.
pub fn make_session() -> api::Session {
    let now = store::unix_now();
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        api::Session::restore(store::LocalStore::new(), now)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        api::Session::restore(store::MemoryStore::new(), now)
    }
}
