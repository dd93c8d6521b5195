//! Typed view over the session store.
//!
//! The session is two independent entries: `token` (opaque string) and
//! `user` (a JSON-serialized [`UserRecord`]). Absent or malformed entries
//! mean "no session" and are never reported as errors on read.

use std::sync::Arc;

use super::secret::SecureString;
use super::store::{SessionStore, StoreError};
use super::user::UserRecord;

/// Store key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Store key holding the serialized cached user.
pub const USER_KEY: &str = "user";

/// Owned handle to the session, shared by the API client and the screens.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// The stored token, if any.
    pub fn token(&self) -> Option<SecureString> {
        self.store.get(TOKEN_KEY).map(SecureString::from)
    }

    pub fn set_token(&self, token: &SecureString) -> Result<(), StoreError> {
        self.store.set(TOKEN_KEY, token.expose())
    }

    /// True when a non-empty user entry is stored, whether or not it parses.
    pub fn has_user(&self) -> bool {
        self.store
            .get(USER_KEY)
            .is_some_and(|raw| !raw.trim().is_empty())
    }

    /// The cached user, or `None` when absent or malformed.
    pub fn try_cached_user(&self) -> Option<UserRecord> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str::<UserRecord>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed cached user");
                None
            }
        }
    }

    /// The cached user, or an empty record when nothing usable is cached.
    pub fn cached_user(&self) -> UserRecord {
        self.try_cached_user().unwrap_or_default()
    }

    /// Replace the cached user.
    pub fn persist_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &serialized)
    }

    /// Store the token and user returned by a successful login.
    pub fn persist_login(&self, token: &SecureString, user: &UserRecord) -> Result<(), StoreError> {
        self.set_token(token)?;
        self.persist_user(user)
    }

    /// Drop the whole session (token, user, and anything else in the store).
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.clear()
    }

    /// Whether `movie_id` is in the cached favorites. False without a session.
    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.try_cached_user()
            .is_some_and(|user| user.has_favorite(movie_id))
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.token().is_some())
            .field("has_user", &self.has_user())
            .finish()
    }
}
