//! # HTTP client wrapper
//!
//! [`ApiClient`] is the single place requests leave the app. It joins paths
//! onto the configured base address, attaches the session's bearer
//! credential when there is one, and turns responses into
//! `Result<serde_json::Value, ApiError>`.
//!
//! A 401/403 from any endpoint resets the [`Session`] (see
//! [`Session::expire`]) before the error reaches the caller. There are no
//! retries: one failed request is one error. Native builds give up on a
//! request after [`REQUEST_TIMEOUT`]; in the browser the fetch API owns
//! timeouts.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use store::ClientConfig;

pub use reqwest::Method;

/// How long a native request may take before it fails as a network error.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

use crate::error::ApiError;
use crate::session::Session;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: Session,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.session == other.session
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Session) -> Self {
        Self::with_timeout(config, session, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(config: ClientConfig, session: Session, timeout: Duration) -> Self {
        Self {
            http: http_client(timeout),
            config,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and return the parsed JSON body.
    ///
    /// Empty 2xx bodies (e.g. `204 No Content`) come back as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        extra_headers: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let url = self.config.endpoint(path);
        let credential = self.session.credential();
        tracing::debug!(%method, %path, authenticated = credential.is_some(), "API request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .headers(header_map(extra_headers)?);
        if let Some(ref token) = credential {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::debug!(%method, %path, "Request failed: {e}");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            tracing::warn!(%method, %path, status = status.as_u16(), "Authentication failure");
            self.session.expire(credential.as_deref());
            return Err(ApiError::Auth {
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::from_body(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Request failed"),
                &text,
            ));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.send(Method::GET, path, None, &[]).await?)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        decode(self.send(Method::POST, path, Some(encode(body)?), &[]).await?)
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        decode(self.send(Method::PATCH, path, Some(encode(body)?), &[]).await?)
    }

    /// DELETE; any 2xx body is discarded.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, None, &[]).await.map(|_| ())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to build HTTP client with timeout: {e}");
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn http_client(_timeout: Duration) -> reqwest::Client {
    reqwest::Client::new()
}

fn header_map(extra: &[(&str, &str)]) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ApiError::Validation(format!("Invalid header name: {name}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| ApiError::Validation(format!("Invalid value for header {name}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Validation(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
