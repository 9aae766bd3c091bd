//! Session persistence for authentication
//!
//! The session is the triple of access token, refresh token, and cached user
//! record created by a successful sign-in or sign-up. Stores are injected
//! into [`crate::Taskhub`] so callers choose where the triple lives: in
//! memory for a single process run, or on disk to survive restarts.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

use crate::auth::User;
use crate::error::Error;

/// Session data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// The access token
    pub access_token: String,

    /// The refresh token
    pub refresh_token: String,

    /// The token type, as reported by the backend
    pub token_type: String,

    /// The cached user record
    pub user: Option<User>,
}

impl Session {
    /// Create a new session
    pub fn new(access_token: String, refresh_token: String, user: Option<User>) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
            user,
        }
    }
}

/// Storage backend for the session triple.
///
/// The triple is saved and cleared as one unit; readers never observe a
/// partially written session. Stores are synchronous — there is no
/// concurrent writer within one client.
pub trait SessionStore: Send + Sync {
    /// Store the session triple, replacing any previous one
    fn save(&self, session: &Session) -> Result<(), Error>;

    /// Read back the stored session, if any
    fn session(&self) -> Option<Session>;

    /// Remove the stored session; idempotent
    fn clear(&self) -> Result<(), Error>;

    /// The stored access token, if any. No expiry or format check is
    /// performed; presence alone is the authentication signal.
    fn access_token(&self) -> Option<String> {
        self.session().map(|s| s.access_token)
    }

    /// The cached user record, if any
    fn user(&self) -> Option<User> {
        self.session().and_then(|s| s.user)
    }
}

/// In-process session store, the default.
#[derive(Default)]
pub struct MemoryStore {
    session: Mutex<Option<Session>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, session: &Session) -> Result<(), Error> {
        let mut current = self.session.lock().unwrap();
        *current = Some(session.clone());
        Ok(())
    }

    fn session(&self) -> Option<Session> {
        let current = self.session.lock().unwrap();
        current.clone()
    }

    fn clear(&self) -> Result<(), Error> {
        let mut current = self.session.lock().unwrap();
        *current = None;
        Ok(())
    }
}

/// On-disk representation: the tokens as plain strings and the user as
/// serialized JSON text, under fixed keys.
#[derive(Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
    refresh_token: String,
    token_type: String,
    user: Option<String>,
}

/// Session store backed by a single JSON file.
///
/// Gives the session the durability of browser local storage: the triple
/// survives process restarts within one machine. Two processes sharing the
/// same file can race, like two browser tabs; this is accepted, not handled.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path. The file is created on
    /// first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SessionStore for FileStore {
    fn save(&self, session: &Session) -> Result<(), Error> {
        let stored = StoredSession {
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
            token_type: session.token_type.clone(),
            user: session
                .user
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?,
        };
        let contents = serde_json::to_vec_pretty(&stored)?;
        std::fs::write(&self.path, contents).map_err(Error::session)?;
        Ok(())
    }

    fn session(&self) -> Option<Session> {
        let contents = match std::fs::read(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to read session file");
                return None;
            }
        };

        let stored: StoredSession = match serde_json::from_slice(&contents) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "corrupt session file, treating as absent");
                return None;
            }
        };

        // A corrupt cached user degrades to an absent user, not an error;
        // the tokens are still usable.
        let user = stored.user.as_deref().and_then(|text| {
            serde_json::from_str(text)
                .map_err(|err| {
                    warn!(path = %self.path.display(), error = %err, "corrupt cached user, treating as absent");
                })
                .ok()
        });

        Some(Session {
            access_token: stored.access_token,
            refresh_token: stored.refresh_token,
            token_type: stored.token_type,
            user,
        })
    }

    fn clear(&self) -> Result<(), Error> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::session(err)),
        }
    }
}
