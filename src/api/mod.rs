//! Session/data-access layer over the remote movie API.
//!
//! ```text
//! ui ──→ ApiClient ──→ reqwest ──→ remote API
//!            │
//!            └──→ Session ──→ SessionStore (token, user)
//! ```

mod auth;
mod client;
mod error;
mod favorites;
mod types;

pub use auth::{bearer_header, AuthHeader};
pub use client::ApiClient;
pub use error::{ApiError, ErrorKind, GENERIC_FAILURE};
pub use favorites::{FavoriteAction, FavoriteOutcome};
pub use types::{Credentials, Director, Genre, LoginResponse, Movie, ProfileUpdate, Registration};
pub use crate::session::UserRecord;
