//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use myflix::api::ApiClient;
use myflix::config::ApiConfig;
use myflix::session::{MemoryStore, SecureString, Session, SessionStore, UserRecord};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use mock_backend::MockBackend;

/// Find a local port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// A session backed by a fresh in-memory store.
pub fn memory_session() -> (Arc<MemoryStore>, Session) {
    let store = Arc::new(MemoryStore::new());
    let session = Session::new(store.clone());
    (store, session)
}

/// Client pointed at `base_url` using `session`.
pub fn client_at(base_url: &str, session: Session) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        timeout_seconds: Some(5),
    };
    ApiClient::new(&config, session).expect("Failed to build client")
}

/// Client against a mock backend with an empty in-memory session.
pub fn client_for(backend: &MockBackend) -> (Arc<MemoryStore>, ApiClient) {
    let (store, session) = memory_session();
    (store, client_at(&backend.base_url(), session))
}

/// The user most tests sign in as.
pub fn ann() -> UserRecord {
    UserRecord {
        id: "u-ann".to_string(),
        username: "ann".to_string(),
        email: "ann@example.com".to_string(),
        favorite_movies: vec!["m1".to_string()],
        ..Default::default()
    }
}

pub fn ann_json() -> String {
    serde_json::to_string(&ann()).unwrap()
}

/// Persist a signed-in session for `user`.
pub fn sign_in(client: &ApiClient, token: &str, user: &UserRecord) {
    client
        .session()
        .persist_login(&SecureString::new(token), user)
        .expect("Failed to persist session");
}

/// Temporary config file with the given API base URL.
pub fn temp_config(base_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let session_path = temp_dir.path().join("session.json");

    let content = format!(
        r#"[api]
base_url = "{}"
connect_timeout_seconds = 2
timeout_seconds = 5

[session]
path = "{}"
"#,
        base_url,
        session_path.display()
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
