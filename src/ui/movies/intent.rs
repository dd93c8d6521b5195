use crate::api::{FavoriteOutcome, Movie};
use crate::ui::dialog::DetailDialog;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MovieListIntent {
    LoadStarted,
    Loaded { movies: Vec<Movie> },
    LoadFailed { message: String },
    OpenDialog(DetailDialog),
    CloseDialog,
    FavoriteToggled(FavoriteOutcome),
    DismissNotice,
}

impl Intent for MovieListIntent {}
