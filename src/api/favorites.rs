//! Favorite-movie mutations.
//!
//! Both directions update the cached user first and persist it, then tell
//! the server. A failed request does not undo the local change; callers that
//! want a rollback use [`ApiClient::toggle_favorite`] and
//! [`ApiClient::revert_favorite`].

use reqwest::Method;
use serde_json::{Map, Value};

use crate::api::client::ApiClient;
use crate::api::error::{ApiError, ErrorKind};

/// Which way a favorite toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Added,
    Removed,
}

/// Result of [`ApiClient::toggle_favorite`].
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteOutcome {
    pub movie_id: String,
    pub action: FavoriteAction,
    /// The cached user was updated and persisted.
    pub applied_locally: bool,
    /// The server accepted the change.
    pub server_confirmed: bool,
    pub error: Option<ErrorKind>,
}

impl FavoriteOutcome {
    /// Local state and server may disagree.
    pub fn is_diverged(&self) -> bool {
        self.applied_locally && !self.server_confirmed
    }

    /// Short status line for the user.
    pub fn notice(&self) -> &'static str {
        match (self.action, self.server_confirmed) {
            (FavoriteAction::Added, true) => "Added to favorites",
            (FavoriteAction::Removed, true) => "Removed from favorites",
            (FavoriteAction::Added, false) => "Error occurred while adding to favorites",
            (FavoriteAction::Removed, false) => "Error occurred while removing from favorites",
        }
    }
}

impl ApiClient {
    /// Add `movie_id` to the cached favorites, persist, then register it
    /// server-side. Returns the server's response body.
    pub async fn add_favorite(&self, movie_id: &str) -> Result<Value, ApiError> {
        let mut user = self.require_user()?;
        user.push_favorite(movie_id);
        self.session().persist_user(&user)?;

        let request = self
            .authorized(Method::POST, &["users", &user.username, "movies", movie_id])
            .header("Content-Type", "application/json");
        self.send_favorite(request, "add_favorite").await
    }

    /// Remove `movie_id` from the cached favorites, persist, then remove it
    /// server-side. Returns the server's response body.
    pub async fn remove_favorite(&self, movie_id: &str) -> Result<Value, ApiError> {
        let mut user = self.require_user()?;
        user.drop_favorite(movie_id);
        self.session().persist_user(&user)?;

        let request =
            self.authorized(Method::DELETE, &["users", &user.username, "movies", movie_id]);
        self.send_favorite(request, "remove_favorite").await
    }

    /// Add or remove `movie_id` depending on the cached state, reporting
    /// what happened locally and remotely. Never rolls back on its own.
    pub async fn toggle_favorite(&self, movie_id: &str) -> FavoriteOutcome {
        let action = if self.is_favorite(movie_id) {
            FavoriteAction::Removed
        } else {
            FavoriteAction::Added
        };

        let result = match action {
            FavoriteAction::Added => self.add_favorite(movie_id).await,
            FavoriteAction::Removed => self.remove_favorite(movie_id).await,
        };

        let (applied_locally, server_confirmed, error) = match result {
            Ok(_) => (true, true, None),
            // These fail before the cache is touched.
            Err(e @ (ApiError::NoSession | ApiError::Store(_))) => (false, false, Some(e.kind())),
            Err(e) => (true, false, Some(e.kind())),
        };

        FavoriteOutcome {
            movie_id: movie_id.to_string(),
            action,
            applied_locally,
            server_confirmed,
            error,
        }
    }

    /// Undo the local half of a diverged toggle. Does nothing for an
    /// outcome that was confirmed or never applied.
    pub fn revert_favorite(&self, outcome: &FavoriteOutcome) -> Result<bool, ApiError> {
        if !outcome.is_diverged() {
            return Ok(false);
        }

        let mut user = self.require_user()?;
        match outcome.action {
            FavoriteAction::Added => {
                user.drop_favorite(&outcome.movie_id);
            }
            FavoriteAction::Removed => user.push_favorite(&outcome.movie_id),
        }
        self.session().persist_user(&user)?;
        tracing::info!(movie_id = %outcome.movie_id, action = ?outcome.action, "Reverted favorite");
        Ok(true)
    }

    async fn send_favorite(
        &self,
        request: reqwest::RequestBuilder,
        operation: &'static str,
    ) -> Result<Value, ApiError> {
        let body: Value = self.fetch_json(request, operation).await?;
        Ok(match body {
            Value::Null => Value::Object(Map::new()),
            other => other,
        })
    }
}
