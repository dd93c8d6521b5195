use crate::api::{ApiClient, ApiError};
use crate::session::SecureString;
use crate::ui::mvi::Reducer;
use crate::ui::nav::{Navbar, Navigation, Route};
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::reducer::ProfileReducer;
use crate::ui::profile::state::ProfileState;

/// Profile screen: shows the cached user and their favorites, edits the
/// profile, and deletes the account behind a confirmation step.
#[derive(Debug, Default)]
pub struct ProfileScreen {
    state: ProfileState,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    fn dispatch(&mut self, intent: ProfileIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = ProfileReducer::reduce(state, intent);
    }

    /// Redirect to the landing screen unless the cached user has an id,
    /// otherwise seed the form and load favorites from the server.
    pub async fn init(&mut self, client: &ApiClient) -> Navigation {
        let user = client.cached_user();
        if user.id.is_empty() {
            return Navigation::Redirect(Route::Welcome);
        }

        let username = user.username.clone();
        self.dispatch(ProfileIntent::Load { user });

        let intent = match client.get_favorites(&username).await {
            Ok(favorites) => ProfileIntent::FavoritesLoaded { favorites },
            Err(e) => ProfileIntent::Failed {
                message: e.user_message().to_string(),
            },
        };
        self.dispatch(intent);
        Navigation::Stay
    }

    pub fn edit_username(&mut self, value: impl Into<String>) {
        self.dispatch(ProfileIntent::EditUsername(value.into()));
    }

    pub fn edit_email(&mut self, value: impl Into<String>) {
        self.dispatch(ProfileIntent::EditEmail(value.into()));
    }

    pub fn edit_password(&mut self, value: impl Into<SecureString>) {
        self.dispatch(ProfileIntent::EditPassword(value.into()));
    }

    /// Send the form to the server and cache the record it returns.
    pub async fn update_user(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let Some(form) = self.state.form() else {
            return Err(ApiError::NoSession);
        };
        let update = form.to_update();

        let result = match client.update_profile(&update).await {
            Ok(user) => client
                .session()
                .persist_user(&user)
                .map(|()| user)
                .map_err(ApiError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(user) => {
                self.dispatch(ProfileIntent::Updated { user });
                Ok(())
            }
            Err(e) => {
                self.dispatch(ProfileIntent::Failed {
                    message: e.user_message().to_string(),
                });
                Err(e)
            }
        }
    }

    /// Arm the delete confirmation.
    pub fn request_delete(&mut self) {
        self.dispatch(ProfileIntent::RequestDelete);
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch(ProfileIntent::CancelDelete);
    }

    /// Delete the account if confirmation was requested, then clear the
    /// session and go to the landing screen.
    pub async fn confirm_delete(&mut self, client: &ApiClient) -> Result<Navigation, ApiError> {
        if !self.state.is_confirming_delete() {
            return Ok(Navigation::Stay);
        }

        if let Err(e) = client.delete_account().await {
            self.dispatch(ProfileIntent::Failed {
                message: e.user_message().to_string(),
            });
            return Err(e);
        }

        let route = Navbar::logout(client.session())?;
        self.dispatch(ProfileIntent::Deleted);
        Ok(Navigation::Redirect(route))
    }
}
