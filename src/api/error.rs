//! Error types for API calls.
//!
//! Callers can branch on the failure kind, but the text shown to users is
//! always the same generic message. Status codes and bodies only go to the
//! log.

use thiserror::Error;

use crate::session::StoreError;

/// Message shown to users for every failed API call.
pub const GENERIC_FAILURE: &str = "Something bad happened; please try again later.";

/// Errors that can occur during API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, timeout)
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("Server rejected request with status {status}")]
    ServerRejected { status: u16 },

    /// The operation needs a cached user and there is none
    #[error("No cached session")]
    NoSession,

    /// A 2xx response whose body was not the expected JSON
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the local session failed
    #[error("Session store error: {0}")]
    Store(#[from] StoreError),
}

/// Copyable classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    ServerRejected(u16),
    NoSession,
    Decode,
    Store,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::ServerRejected { status } => ErrorKind::ServerRejected(*status),
            ApiError::NoSession => ErrorKind::NoSession,
            ApiError::Decode { .. } => ErrorKind::Decode,
            ApiError::Store(_) => ErrorKind::Store,
        }
    }

    /// The user-facing message. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE
    }

    /// True for a 401/403 from the server.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::ServerRejected { status: 401 | 403 })
    }
}
