//! Sign-in, sign-up and sign-out.
//!
//! [`login`] and [`register`] are thin request wrappers. [`sign_in`] and
//! [`sign_up`] also hand the result to the [`Session`], so the credential is
//! usable by the very next request.

pub mod claims;

use store::User;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::session::Session;
use crate::require;

/// `POST /auth/login`
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    require("Email", email)?;
    require("Password", password)?;
    client.post("/auth/login", &LoginRequest { email, password }).await
}

/// `POST /auth/register`
pub async fn register(
    client: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    require("Name", name)?;
    require("Email", email)?;
    require("Password", password)?;
    client
        .post("/auth/register", &RegisterRequest { name, email, password })
        .await
}

pub async fn sign_in(client: &ApiClient, email: &str, password: &str) -> Result<User, ApiError> {
    let AuthResponse { token, user } = login(client, email, password).await?;
    client.session().login(user.clone(), token);
    Ok(user)
}

pub async fn sign_up(
    client: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let AuthResponse { token, user } = register(client, name, email, password).await?;
    client.session().login(user.clone(), token);
    Ok(user)
}

/// Client-side only; the API has no logout endpoint.
pub fn sign_out(session: &Session) {
    session.logout();
}
