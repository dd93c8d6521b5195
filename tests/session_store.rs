//! Session persistence through the file-backed store.

mod common;

use std::sync::Arc;

use common::ann;
use myflix::session::{FileStore, SecureString, Session, SessionStore, TOKEN_KEY, USER_KEY};
use myflix::ui::{Navbar, Route};
use tempfile::TempDir;

fn file_session(dir: &TempDir) -> Session {
    Session::new(Arc::new(FileStore::new(dir.path().join("session.json"))))
}

#[test]
fn session_survives_a_new_store_instance() {
    let dir = TempDir::new().unwrap();
    file_session(&dir)
        .persist_login(&SecureString::new("jwt-1"), &ann())
        .unwrap();

    let reopened = file_session(&dir);
    assert_eq!(reopened.token().unwrap().expose(), "jwt-1");
    assert_eq!(reopened.cached_user(), ann());
    assert!(reopened.is_favorite("m1"));
}

#[test]
fn user_is_stored_as_serialized_json_string() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    let session = Session::new(Arc::new(FileStore::new(&path)));
    session.persist_user(&ann()).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let user_entry = raw[USER_KEY].as_str().expect("user entry is a string");
    let user: serde_json::Value = serde_json::from_str(user_entry).unwrap();
    assert_eq!(user["Username"], "ann");
    assert_eq!(user["favoriteMovies"], serde_json::json!(["m1"]));
}

#[test]
fn entries_are_independent() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("session.json"));
    store.set(TOKEN_KEY, "jwt-1").unwrap();
    store.set(USER_KEY, "{}").unwrap();

    store.remove(TOKEN_KEY).unwrap();
    assert!(store.get(TOKEN_KEY).is_none());
    assert_eq!(store.get(USER_KEY).as_deref(), Some("{}"));
}

#[test]
fn logout_clears_token_and_user() {
    let dir = TempDir::new().unwrap();
    let session = file_session(&dir);
    session
        .persist_login(&SecureString::new("jwt-1"), &ann())
        .unwrap();
    session.store().set("other", "x").unwrap();

    let route = Navbar::logout(&session).unwrap();

    assert_eq!(route, Route::Welcome);
    assert!(session.token().is_none());
    assert!(session.store().get("other").is_none());
    assert!(session.cached_user().is_empty());
    assert!(!session.is_favorite("m1"));
}

#[test]
fn is_favorite_without_session_has_no_side_effects() {
    let dir = TempDir::new().unwrap();
    let session = file_session(&dir);

    assert!(!session.is_favorite("m1"));
    assert!(!session.is_favorite("m1"));
    assert!(!dir.path().join("session.json").exists());
}

#[test]
fn navbar_routes() {
    assert_eq!(Navbar::to_movies(), Route::Movies);
    assert_eq!(Navbar::to_profile().path(), "profile");
    assert_eq!(Route::Welcome.path(), "welcome");
}
