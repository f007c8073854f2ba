//! # API crate — authenticated access to the Kanban backend
//!
//! Every frontend call to the remote API goes through this crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base address, bearer credential, auth-failure reset |
//! | [`session`] | [`Session`]: the user + credential store, its observers and navigation events |
//! | [`auth`] | Sign-in / sign-up / sign-out wrappers, JWT claim decoding |
//! | [`boards`] | Board and task wrappers |
//! | [`models`] | Request/response bodies without a domain counterpart |
//! | [`error`] | [`ApiError`] |
//!
//! Wrappers validate only that required fields are present; anything else
//! (email format, password strength) is left to the page.

pub mod auth;
pub mod boards;
pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::{ApiClient, Method, REQUEST_TIMEOUT};
pub use error::ApiError;
pub use models::{AuthResponse, NewTask, TaskPatch};
pub use session::{AuthSnapshot, Session, SessionEvent};
pub use store::{Board, ClientConfig, Column, ColumnStage, Task, User};

/// Fail with [`ApiError::Validation`] if `value` is blank. Returns it trimmed.
pub(crate) fn require<'a>(field: &str, value: &'a str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{field} is required")));
    }
    Ok(trimmed)
}
