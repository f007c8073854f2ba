//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_api, use_auth, use_session_events, AuthProvider, LogoutButton};

pub mod guard;
pub use guard::{guard, safe_next, GuardDecision};

pub mod board_state;
pub use board_state::{CreateOutcome, PendingTask, TaskLedger, Ticket};

mod board;
pub use board::{MoveDirection, TaskCard, TaskColumn};

mod navbar;
pub use navbar::Navbar;

mod session;
pub use session::make_session;
