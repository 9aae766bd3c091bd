//! Error handling for the Taskhub client

use std::fmt;
use thiserror::Error;

/// Message used when a failed response carries no parseable error body.
pub const GENERIC_ERROR_DETAIL: &str = "An error occurred";

/// Unified error type for the Taskhub client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success response from the backend, carrying the `detail`
    /// message from its error body (or the generic fallback)
    #[error("{detail}")]
    Api {
        /// HTTP status code of the failed response
        status: u16,
        /// Backend-supplied error detail
        detail: String,
    },

    /// Session persistence errors
    #[error("Session store error: {0}")]
    Session(String),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Create a new API error from a status code and detail message
    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        Error::Api {
            status,
            detail: detail.into(),
        }
    }

    /// Create a new session store error
    pub fn session<T: fmt::Display>(msg: T) -> Self {
        Error::Session(msg.to_string())
    }

    /// The HTTP status of a failed backend call, if this error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
