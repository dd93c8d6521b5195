use crate::api::ProfileUpdate;
use crate::session::{SecureString, UserRecord};
use crate::ui::mvi::UiState;

/// Editable profile fields. The password starts empty and is only sent
/// when the user typed one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub password: SecureString,
}

impl ProfileForm {
    pub fn from_user(user: &UserRecord) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: SecureString::default(),
        }
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            username: Some(self.username.clone()),
            email: Some(self.email.clone()),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            birthday: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    #[default]
    Idle,
    Ready {
        user: UserRecord,
        form: ProfileForm,
        favorites: Vec<String>,
        /// Set by the first delete request; the second one deletes.
        confirm_delete: bool,
        notice: Option<String>,
    },
    Deleted,
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            Self::Ready { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&ProfileForm> {
        match self {
            Self::Ready { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn favorites(&self) -> &[String] {
        match self {
            Self::Ready { favorites, .. } => favorites,
            _ => &[],
        }
    }

    pub fn is_confirming_delete(&self) -> bool {
        matches!(
            self,
            Self::Ready {
                confirm_delete: true,
                ..
            }
        )
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Ready { notice, .. } => notice.as_deref(),
            _ => None,
        }
    }
}
