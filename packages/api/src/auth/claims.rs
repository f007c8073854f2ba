//! Best-effort decoding of JWT credentials.
//!
//! The signature is not checked: the server does that on every request. The
//! payload is only read to show who is signed in after a reload and to drop
//! credentials that have visibly expired.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;
use store::models::de_opt_id;
use store::User;

#[derive(Debug, Default, Deserialize)]
pub struct Claims {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub sub: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now)
    }

    /// A user needs at least an id; `id` wins over `sub`.
    pub fn into_user(self) -> Option<User> {
        let id = self.id.or(self.sub)?;
        Some(User {
            id,
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            role: self.role,
        })
    }
}

/// Decode the payload segment of `header.payload.signature`.
///
/// Returns `None` for anything that is not a three-part token with a JSON
/// object payload.
pub fn decode(token: &str) -> Option<Claims> {
    let mut parts = token.split('.');
    let (_header, payload, _sig) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| URL_SAFE.decode(payload))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}
