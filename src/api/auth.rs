//! Authentication header building for API requests.

use crate::session::SecureString;

/// Header name and value for authentication.
pub type AuthHeader = (&'static str, String);

/// Build the bearer header from the token stored at call time.
///
/// A missing token is rendered as the literal `null`, so an unauthenticated
/// session sends `Bearer null` and the server decides what to do with it.
pub fn bearer_header(token: Option<&SecureString>) -> AuthHeader {
    let value = match token {
        Some(token) => format!("Bearer {}", token.expose()),
        None => "Bearer null".to_string(),
    };
    ("Authorization", value)
}
