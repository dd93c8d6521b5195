use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::auth::bearer_header;
use crate::api::error::ApiError;
use crate::api::types::{Credentials, Director, Genre, LoginResponse, Movie, ProfileUpdate, Registration};
use crate::config::{ApiConfig, ConfigError};
use crate::session::{Session, UserRecord};

/// Data-access client for the movie API.
///
/// Authenticated calls read the bearer token from the session at call time;
/// nothing is cached on the client itself.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self, ConfigError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid API base URL '{}': {}", config.base_url, e),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::ValidationError {
                message: format!("API base URL '{}' cannot be a base", config.base_url),
            });
        }

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()));
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout.into()));
        }
        let http = builder.build().map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Register a new account. The returned record is not persisted.
    pub async fn register(&self, details: &Registration) -> Result<UserRecord, ApiError> {
        let request = self.request(Method::POST, &["users"]).json(details);
        self.fetch_json(request, "register").await
    }

    /// Log in. The caller persists the returned token and user.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let mut url = self.endpoint(&["login"]);
        url.query_pairs_mut().extend_pairs(credentials.query_pairs());

        let request = self
            .http
            .post(url)
            .json(&Value::Object(Default::default()));
        self.fetch_json(request, "login").await
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let request = self.authorized(Method::GET, &["movies"]);
        self.fetch_json(request, "list_movies").await
    }

    pub async fn get_movie(&self, title: &str) -> Result<Movie, ApiError> {
        let request = self.authorized(Method::GET, &["movies", title]);
        self.fetch_json(request, "get_movie").await
    }

    pub async fn get_genre(&self, name: &str) -> Result<Genre, ApiError> {
        let request = self.authorized(Method::GET, &["movies", "genre", name]);
        self.fetch_json(request, "get_genre").await
    }

    pub async fn get_director(&self, name: &str) -> Result<Director, ApiError> {
        let request = self.authorized(Method::GET, &["movies", "director", name]);
        self.fetch_json(request, "get_director").await
    }

    /// The cached user. Never touches the network: the API has no
    /// lookup-by-name endpoint, so the cache is the only source.
    pub fn cached_user(&self) -> UserRecord {
        self.session.cached_user()
    }

    /// Fetch the user's record and return only its favorites.
    pub async fn get_favorites(&self, username: &str) -> Result<Vec<String>, ApiError> {
        let request = self.authorized(Method::GET, &["users", username]);
        let user: UserRecord = self.fetch_json(request, "get_favorites").await?;
        Ok(user.favorite_movies)
    }

    /// Update the cached user's profile. The returned record is not persisted.
    pub async fn update_profile(&self, fields: &ProfileUpdate) -> Result<UserRecord, ApiError> {
        let user = self.require_user()?;
        let request = self
            .authorized(Method::PUT, &["users", &user.username])
            .json(fields);
        self.fetch_json(request, "update_profile").await
    }

    /// Delete the cached user's account. The server answers in plain text.
    pub async fn delete_account(&self) -> Result<String, ApiError> {
        let user = self.require_user()?;
        let request = self.authorized(Method::DELETE, &["users", &user.username]);
        let response = self.execute(request, "delete_account").await?;
        response.text().await.map_err(|source| {
            tracing::error!(operation = "delete_account", error = %source, "Failed to read response body");
            ApiError::Network { source }
        })
    }

    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.session.is_favorite(movie_id)
    }

    /// The cached user, required to have a username.
    pub(crate) fn require_user(&self) -> Result<UserRecord, ApiError> {
        match self.session.try_cached_user() {
            Some(user) if !user.username.is_empty() => Ok(user),
            _ => Err(ApiError::NoSession),
        }
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.http.request(method, self.endpoint(segments))
    }

    pub(crate) fn authorized(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let token = self.session.token();
        let (name, value) = bearer_header(token.as_ref());
        self.request(method, segments).header(name, value)
    }

    /// Send a request, turning transport failures and non-2xx statuses into
    /// [`ApiError`]. Status and body are logged here and nowhere else.
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        operation: &'static str,
    ) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| {
            tracing::error!(operation, error = %source, "Some error occurred");
            ApiError::Network { source }
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(operation, status = status.as_u16(), "API call succeeded");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(
            operation,
            status = status.as_u16(),
            body = %body,
            "API call failed"
        );
        Err(ApiError::ServerRejected {
            status: status.as_u16(),
        })
    }

    pub(crate) async fn fetch_json<T>(
        &self,
        request: RequestBuilder,
        operation: &'static str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.execute(request, operation).await?;
        let body = response.text().await.map_err(|source| {
            tracing::error!(operation, error = %source, "Failed to read response body");
            ApiError::Network { source }
        })?;

        extract_response_data(&body).map_err(|source| {
            tracing::error!(operation, error = %source, "Unexpected response body");
            ApiError::Decode { source }
        })
    }
}

/// Parse a response body, substituting the empty value for a falsy one
/// (empty, `null`, `false`, `0`, `""`).
fn extract_response_data<T>(body: &str) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if body.trim().is_empty() {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_str(body)?;
    if is_falsy(&value) {
        return Ok(T::default());
    }
    serde_json::from_value(value)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
