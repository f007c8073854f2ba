//! Request and response bodies for the endpoints the client talks to.
//!
//! Domain entities ([`store::Board`], [`store::Task`], [`store::User`]) are
//! parsed directly; the types here only cover bodies that have no domain
//! counterpart.

use serde::{Deserialize, Serialize};
use store::User;

/// Response of `/auth/login` and `/auth/register`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewBoard<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub column_id: String,
}

/// Partial update for `PATCH /tasks/:id`. `None` fields are left out of the
/// body entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<String>,
}

impl TaskPatch {
    pub fn move_to(column_id: impl Into<String>) -> Self {
        Self {
            column_id: Some(column_id.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.column_id.is_none()
    }
}
