//! Client for the myFlix movie catalog API.
//!
//! The crate is split into a session/data-access layer ([`session`], [`api`])
//! and headless view components ([`ui`]) that consume it. Configuration and
//! logging live in [`config`] and [`logging`].

pub mod api;
pub mod config;
pub mod logging;
pub mod session;
pub mod ui;
