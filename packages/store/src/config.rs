//! # Client configuration
//!
//! The only setting is the API base address. It is read once at startup from
//! `KANBAN_API_URL` and never changes afterwards.
//!
//! - **Native**: a `.env` file is loaded with `dotenvy`, then the process
//!   environment is consulted.
//! - **Web** (`wasm32`): there is no process environment in the browser, so the
//!   value is captured at compile time with `option_env!`.
//!
//! A missing variable falls back to [`DEFAULT_API_URL`].

use thiserror::Error;
use url::Url;

/// Environment variable supplying the API base address.
pub const API_URL_VAR: &str = "KANBAN_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Absolute http(s) address without a trailing slash.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build from an explicit base address.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
        }

        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }

    /// Read `KANBAN_API_URL` for the current platform.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(Self::raw_env())
    }

    /// Use `value` if set and non-empty, the default otherwise.
    pub fn resolve(value: Option<String>) -> Result<Self, ConfigError> {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(url) => Self::new(&url),
            None => Ok(Self::default()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn raw_env() -> Option<String> {
        option_env!("KANBAN_API_URL").map(str::to_string)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn raw_env() -> Option<String> {
        dotenvy::dotenv().ok();
        std::env::var(API_URL_VAR).ok()
    }

    /// Join a documented endpoint path onto the base address.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
