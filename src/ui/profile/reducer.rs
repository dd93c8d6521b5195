use crate::session::UserRecord;
use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::state::{ProfileForm, ProfileState};

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Load { user } => ProfileState::Ready {
                form: ProfileForm::from_user(&user),
                user,
                favorites: Vec::new(),
                confirm_delete: false,
                notice: None,
            },
            ProfileIntent::Deleted => ProfileState::Deleted,
            intent => match state {
                ProfileState::Ready {
                    user,
                    form,
                    favorites,
                    confirm_delete,
                    notice,
                } => reduce_ready(user, form, favorites, confirm_delete, notice, intent),
                other => other,
            },
        }
    }
}

fn reduce_ready(
    mut user: UserRecord,
    mut form: ProfileForm,
    mut favorites: Vec<String>,
    mut confirm_delete: bool,
    mut notice: Option<String>,
    intent: ProfileIntent,
) -> ProfileState {
    match intent {
        ProfileIntent::FavoritesLoaded { favorites: loaded } => favorites = loaded,
        ProfileIntent::EditUsername(value) => form.username = value,
        ProfileIntent::EditEmail(value) => form.email = value,
        ProfileIntent::EditPassword(value) => form.password = value,
        ProfileIntent::Updated { user: updated } => {
            form = ProfileForm::from_user(&updated);
            favorites = updated.favorite_movies.clone();
            user = updated;
            notice = Some("User updated!".to_string());
        }
        ProfileIntent::Failed { message } => {
            confirm_delete = false;
            notice = Some(message);
        }
        ProfileIntent::RequestDelete => confirm_delete = true,
        ProfileIntent::CancelDelete => confirm_delete = false,
        ProfileIntent::Load { .. } | ProfileIntent::Deleted => {}
    }

    ProfileState::Ready {
        user,
        form,
        favorites,
        confirm_delete,
        notice,
    }
}
