//! Error taxonomy for client actions.
//!
//! Transport and server failures are caught at the action boundary and
//! surfaced as strings on the owning store; they never propagate past it.

use thiserror::Error;

/// Failure of a single request against the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, DNS, TLS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status. Carries the body's
    /// `message` field when the response included one.
    #[error("server rejected the request ({status}){}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected {
        status: reqwest::StatusCode,
        message: Option<String>,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The message to show the user: the server-provided text when the
    /// response carried one, otherwise the per-action fallback.
    #[must_use]
    pub fn surface_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Failure reading or writing the persisted session.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored session is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}
