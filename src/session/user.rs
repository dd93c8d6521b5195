use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The user record as returned by the API and cached in the session.
///
/// Field names follow the server's JSON. Fields this client doesn't model
/// (birthday, password hash, ...) are kept in `extra` so that re-persisting a
/// cached record never drops server data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "favoriteMovies", alias = "FavoriteMovies", default)]
    pub favorite_movies: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// True for the placeholder returned when nothing is cached.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn has_favorite(&self, movie_id: &str) -> bool {
        self.favorite_movies.iter().any(|id| id == movie_id)
    }

    /// Append a favorite. Duplicates are not filtered, matching the server's
    /// own append semantics.
    pub fn push_favorite(&mut self, movie_id: &str) {
        self.favorite_movies.push(movie_id.to_string());
    }

    /// Remove the first occurrence of `movie_id`. Returns whether one was found.
    pub fn drop_favorite(&mut self, movie_id: &str) -> bool {
        match self.favorite_movies.iter().position(|id| id == movie_id) {
            Some(index) => {
                self.favorite_movies.remove(index);
                true
            }
            None => false,
        }
    }
}
