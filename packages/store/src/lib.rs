pub mod config;
pub mod models;
pub mod slot;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{ClientConfig, ConfigError};
pub use models::{Board, Column, ColumnStage, Task, User};
pub use slot::{SlotStore, CREDENTIAL_SLOT};

/// Seconds since the Unix epoch on both native and browser targets.
pub fn unix_now() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}
