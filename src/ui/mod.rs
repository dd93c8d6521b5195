//! Headless view components.
//!
//! Each screen is a state machine built on [`mvi`]: the screen performs API
//! calls through [`crate::api::ApiClient`] and feeds the results to its
//! reducer. Rendering is left to the front end.

pub mod dialog;
pub mod movies;
pub mod mvi;
pub mod nav;
pub mod profile;

pub use dialog::DetailDialog;
pub use nav::{Navbar, Navigation, Route};
