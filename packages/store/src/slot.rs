//! Named string slots in persistent client-side storage.
//!
//! The session keeps exactly one value here: the bearer credential under
//! [`CREDENTIAL_SLOT`]. An absent slot means logged out.

/// Storage key holding the bearer credential.
pub const CREDENTIAL_SLOT: &str = "kanban.token";

/// Synchronous key/value storage for small strings.
///
/// Implementations are cheap handles; clones share the same backing storage.
pub trait SlotStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
