//! Taskhub Rust Client Library
//!
//! A typed Rust client for the Taskhub todo-list backend: bearer-token
//! authentication, task CRUD with filters, and pluggable session
//! persistence.
//!
//! ```no_run
//! use taskhub_client::{Taskhub, auth::LoginRequest, tasks::TaskFilter};
//!
//! # async fn run() -> Result<(), taskhub_client::Error> {
//! let hub = Taskhub::from_env()?;
//!
//! hub.auth()
//!     .sign_in(LoginRequest {
//!         email: "a@b.com".to_string(),
//!         password: "secret".to_string(),
//!         remember_me: None,
//!     })
//!     .await?;
//!
//! let listing = hub.tasks().list(Some(TaskFilter::Pending)).await?;
//! println!("{} pending", listing.pending);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod fetch;
pub mod session;
pub mod tasks;

use reqwest::Client;
use std::sync::Arc;
use url::Url;

use crate::auth::AuthClient;
use crate::config::ClientOptions;
use crate::session::{MemoryStore, SessionStore};
use crate::tasks::TasksClient;

pub use crate::error::Error;

/// The main entry point for the Taskhub client
///
/// Owns the backend base URL, a shared HTTP client, and the session store
/// the sub-clients read tokens from. The store is injected, so tests and
/// embedders can swap persistence without global state.
pub struct Taskhub {
    /// The base URL for the backend
    url: String,
    /// HTTP client used for requests
    http_client: Client,
    /// Session store shared by the sub-clients
    store: Arc<dyn SessionStore>,
    /// Client options
    options: ClientOptions,
}

impl Taskhub {
    /// Create a new client for the given backend base URL, holding its
    /// session in memory
    ///
    /// # Example
    ///
    /// ```no_run
    /// use taskhub_client::Taskhub;
    ///
    /// let hub = Taskhub::new("http://localhost:8000").unwrap();
    /// ```
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_store(base_url, Arc::new(MemoryStore::new()))
    }

    /// Create a new client using the `TASKHUB_API_URL` environment
    /// variable, falling back to the local development address
    pub fn from_env() -> Result<Self, Error> {
        Self::new(&config::base_url_from_env())
    }

    /// Create a new client with an injected session store
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use taskhub_client::Taskhub;
    /// use taskhub_client::session::FileStore;
    ///
    /// let store = Arc::new(FileStore::new("session.json"));
    /// let hub = Taskhub::with_store("http://localhost:8000", store).unwrap();
    /// ```
    pub fn with_store(base_url: &str, store: Arc<dyn SessionStore>) -> Result<Self, Error> {
        Self::new_with_options(base_url, store, ClientOptions::default())
    }

    /// Create a new client with an injected session store and custom options
    pub fn new_with_options(
        base_url: &str,
        store: Arc<dyn SessionStore>,
        options: ClientOptions,
    ) -> Result<Self, Error> {
        // Validate the URL up front so a bad base URL fails here, not on
        // the first request.
        Url::parse(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            url: base_url.trim_end_matches('/').to_string(),
            http_client,
            store,
            options,
        })
    }

    /// Get the auth client for sign-up, sign-in, and session queries
    pub fn auth(&self) -> AuthClient {
        AuthClient::new(
            &self.url,
            self.http_client.clone(),
            Arc::clone(&self.store),
            self.options.clone(),
        )
    }

    /// Get the tasks client for task CRUD and filtering
    pub fn tasks(&self) -> TasksClient {
        TasksClient::new(&self.url, self.http_client.clone(), Arc::clone(&self.store))
    }

    /// The session store this client reads and writes
    pub fn store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.store)
    }

    /// Whether a session with an access token is stored
    pub fn is_authenticated(&self) -> bool {
        self.store.access_token().is_some()
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::auth::{LoginRequest, SignupRequest};
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::session::{FileStore, MemoryStore, Session, SessionStore};
    pub use crate::tasks::{TaskCreate, TaskFilter, TaskUpdate};
    pub use crate::Taskhub;
}
