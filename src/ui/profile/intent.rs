use crate::session::{SecureString, UserRecord};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    Load { user: UserRecord },
    FavoritesLoaded { favorites: Vec<String> },
    EditUsername(String),
    EditEmail(String),
    EditPassword(SecureString),
    /// The server accepted a profile update and returned this record.
    Updated { user: UserRecord },
    Failed { message: String },
    /// First step of account deletion: ask for confirmation.
    RequestDelete,
    CancelDelete,
    Deleted,
}

impl Intent for ProfileIntent {}
