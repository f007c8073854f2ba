use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::slot::SlotStore;

/// In-memory SlotStore for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, as if left over from a previous page load.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SlotStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.slots().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::CREDENTIAL_SLOT;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get(CREDENTIAL_SLOT).is_none());

        store.set(CREDENTIAL_SLOT, "tok1");
        assert_eq!(store.get(CREDENTIAL_SLOT).as_deref(), Some("tok1"));

        store.set(CREDENTIAL_SLOT, "tok2");
        assert_eq!(store.get(CREDENTIAL_SLOT).as_deref(), Some("tok2"));

        store.remove(CREDENTIAL_SLOT);
        assert!(store.get(CREDENTIAL_SLOT).is_none());
    }

    #[test]
    fn test_clones_share_slots() {
        let store = MemoryStore::with_slot("k", "v");
        let other = store.clone();
        other.remove("k");
        assert!(store.get("k").is_none());
    }
}
