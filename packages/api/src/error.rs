//! Error taxonomy for every call that goes through [`crate::ApiClient`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response was received: DNS, refused connection, timeout, aborted fetch.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status other than 401/403.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// 401/403. The session has already been reset when this is returned.
    #[error("Not authorized (HTTP {status})")]
    Auth { status: u16 },

    /// A required field was missing; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// A 2xx body did not have the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Auth { status } => Some(*status),
            _ => None,
        }
    }

    /// Pull a human-readable message out of an error body.
    ///
    /// Prefers a JSON `message` or `error` field, then the raw text, then the
    /// status reason phrase.
    pub(crate) fn from_body(status: u16, reason: &str, body: &str) -> Self {
        let from_json = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error"]
                    .iter()
                    .find_map(|k| v.get(k).and_then(|m| m.as_str()).map(str::to_string))
            });

        let message = from_json
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .unwrap_or_else(|| reason.to_string());

        Self::Status { status, message }
    }
}
