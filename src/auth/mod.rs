//! Authentication for the Taskhub backend
//!
//! Sign-up and sign-in are the only calls that mutate the session store: on
//! success they save the token triple and user as one unit. Sign-out is a
//! pure local clear — the backend has no revocation endpoint, so a
//! server-invalidated token only surfaces on the next failing request.

mod types;

use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::{Fetch, FetchBuilder};
use crate::session::{Session, SessionStore};

pub use types::*;

/// Client for Taskhub authentication
pub struct AuthClient {
    /// The base URL for the backend
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// The session store shared with the rest of the client
    store: Arc<dyn SessionStore>,

    /// Client options
    options: ClientOptions,
}

impl AuthClient {
    /// Create a new auth client
    pub(crate) fn new(
        url: &str,
        client: Client,
        store: Arc<dyn SessionStore>,
        options: ClientOptions,
    ) -> Self {
        Self {
            url: url.to_string(),
            client,
            store,
            options,
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/api/auth{}", self.url, path)
    }

    // The bearer token is attached whenever the store holds one, auth
    // endpoints included: a re-login while a session exists still carries
    // the old token, and the backend decides what to do with it.
    fn authorize<'a>(&self, builder: FetchBuilder<'a>) -> FetchBuilder<'a> {
        match self.store.access_token() {
            Some(token) => builder.bearer_auth(&token),
            None => builder,
        }
    }

    fn persist(&self, response: &AuthResponse) -> Result<(), Error> {
        if !self.options.persist_session {
            return Ok(());
        }
        let session = Session {
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone(),
            token_type: response.token_type.clone(),
            user: Some(response.user.clone()),
        };
        self.store.save(&session)
    }

    /// Register a new user account
    ///
    /// On success the returned token triple and user are saved to the
    /// session store.
    pub async fn sign_up(&self, request: SignupRequest) -> Result<AuthResponse, Error> {
        let url = self.auth_url("/signup");

        let result = self
            .authorize(Fetch::post(&self.client, &url))
            .json(&request)?
            .execute::<AuthResponse>()
            .await?;

        self.persist(&result)?;
        debug!(user = %result.user.id, "signed up");

        Ok(result)
    }

    /// Sign in with email and password
    ///
    /// On success the returned token triple and user are saved to the
    /// session store.
    pub async fn sign_in(&self, request: LoginRequest) -> Result<AuthResponse, Error> {
        let url = self.auth_url("/login");

        let result = self
            .authorize(Fetch::post(&self.client, &url))
            .json(&request)?
            .execute::<AuthResponse>()
            .await?;

        self.persist(&result)?;
        debug!(user = %result.user.id, "signed in");

        Ok(result)
    }

    /// Sign out by clearing the stored session
    ///
    /// Local only: no backend call is made and the tokens are not revoked
    /// server-side.
    pub fn sign_out(&self) -> Result<(), Error> {
        self.store.clear()
    }

    /// Whether a session with an access token is stored
    ///
    /// Presence is the sole signal; the token is not decoded and no expiry
    /// check is made.
    pub fn is_authenticated(&self) -> bool {
        self.store.access_token().is_some()
    }

    /// The cached user from the last successful sign-in or sign-up, if any
    pub fn current_user(&self) -> Option<User> {
        self.store.user()
    }

    /// The stored session triple, if any
    pub fn session(&self) -> Option<Session> {
        self.store.session()
    }
}
