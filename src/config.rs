//! Configuration options for the Taskhub client

use std::time::Duration;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "TASKHUB_API_URL";

/// Base URL used when no environment override is present.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Resolve the backend base URL from the environment, falling back to the
/// local development address.
pub fn base_url_from_env() -> String {
    std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Configuration options for the Taskhub client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// Whether successful sign-in/sign-up responses are written to the
    /// session store
    pub persist_session: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            persist_session: true,
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set whether to persist the session
    pub fn with_persist_session(mut self, value: bool) -> Self {
        self.persist_session = value;
        self
    }
}
