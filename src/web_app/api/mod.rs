// web_app/api/mod.rs - Client for the products REST service
//
// This module wraps the four product endpoints behind typed functions.
// It compiles for both targets: reqwest uses hyper on the server and the
// browser's fetch in WASM.

pub mod client;
pub mod config;

pub use client::ProductApi;
pub use config::ApiConfig;

use thiserror::Error;

/// Everything that can go wrong talking to the products service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text shown to the user for a failed action
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull a human readable message out of an error body, if there is one
///
/// Accepts `{"error": "..."}`, `{"message": "..."}` and
/// `{"error": {"message": "..."}}`.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let field = value.get("error").or_else(|| value.get("message"))?;
    match field {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Object(inner) => inner
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        _ => None,
    }
}
