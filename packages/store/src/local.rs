//! # `localStorage` slot store — browser-side persistence
//!
//! [`LocalStore`] is the [`SlotStore`] used on the **web platform**. It reads
//! and writes `window.localStorage`, so the credential survives page reloads
//! and is dropped only by an explicit logout or an auth failure.
//!
//! ## Error handling
//!
//! All methods swallow errors (private browsing, quota, storage disabled).
//! A failed read degrades to "logged out" and a failed write leaves the
//! session usable for the lifetime of the tab.

use web_sys::Storage;

use crate::slot::SlotStore;

/// `window.localStorage`-backed SlotStore.
///
/// Holds no handle itself: `web_sys::Storage` is not `Send`, so each call
/// looks the storage object up again.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SlotStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
