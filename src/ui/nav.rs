//! Screen routing and the navigation bar.

use crate::session::{Session, StoreError};

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing screen for signed-out users.
    Welcome,
    Movies,
    Profile,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Welcome => "welcome",
            Route::Movies => "movies",
            Route::Profile => "profile",
        }
    }
}

/// What a screen asks the router to do after initializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Redirect(Route),
}

/// Navigation bar actions.
pub struct Navbar;

impl Navbar {
    pub fn to_movies() -> Route {
        Route::Movies
    }

    pub fn to_profile() -> Route {
        Route::Profile
    }

    /// Sign out: wipe the whole session store and go to the landing screen.
    pub fn logout(session: &Session) -> Result<Route, StoreError> {
        session.clear()?;
        tracing::info!("Logged out");
        Ok(Route::Welcome)
    }
}
