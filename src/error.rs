//! Error handling for the Cantina Rust client

use std::fmt;
use thiserror::Error;

/// Unified error type for the Cantina Rust client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Non-success responses from the backend
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The school price table changed since it was last read
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Local validation errors, surfaced before any request is sent
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Create a new API error from a response status and body
    pub fn api<T: fmt::Display>(status: u16, msg: T) -> Self {
        Error::Api {
            status,
            message: msg.to_string(),
        }
    }

    /// Create a new conflict error
    pub fn conflict<T: fmt::Display>(msg: T) -> Self {
        Error::Conflict(msg.to_string())
    }

    /// Create a new validation error
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }
}
