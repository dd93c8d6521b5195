//! Locally persisted session: bearer token plus cached user record.

mod file_store;
mod secret;
mod state;
mod store;
mod user;

pub use file_store::FileStore;
pub use secret::SecureString;
pub use state::{Session, TOKEN_KEY, USER_KEY};
pub use store::{MemoryStore, SessionStore, StoreError};
pub use user::UserRecord;
