use serde_json::Value;
use thiserror::Error;

use crate::models::is_truthy;

/// Failure of a single backend call.
///
/// `Display` is the human-readable message shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Malformed(String),
}

impl ApiError {
    /// Build an HTTP error from a non-success status and its (possibly empty) body.
    ///
    /// A truthy `error` field in the body becomes the message; a missing or
    /// falsy one falls back to a status-code message.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let parsed: Value = serde_json::from_slice(body).unwrap_or_else(|_| serde_json::json!({}));
        let message = match parsed.get("error") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(other) if is_truthy(other) => other.to_string(),
            _ => format!("Request failed: {}", status),
        };
        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Malformed(format!("Invalid response body: {}", e))
        } else if e.is_connect() {
            ApiError::Transport(format!("Connection failed: {}", e))
        } else {
            ApiError::Transport(format!("Request failed: {}", e))
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
