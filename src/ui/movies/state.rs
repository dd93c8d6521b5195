use crate::api::Movie;
use crate::ui::dialog::DetailDialog;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum MovieListState {
    #[default]
    Idle,
    Loading,
    Loaded {
        movies: Vec<Movie>,
        dialog: Option<DetailDialog>,
        /// Snackbar line from the last favorite toggle.
        notice: Option<String>,
    },
    Failed {
        message: String,
    },
}

impl UiState for MovieListState {}

impl MovieListState {
    pub fn movies(&self) -> &[Movie] {
        match self {
            Self::Loaded { movies, .. } => movies,
            _ => &[],
        }
    }

    pub fn dialog(&self) -> Option<&DetailDialog> {
        match self {
            Self::Loaded { dialog, .. } => dialog.as_ref(),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Loaded { notice, .. } => notice.as_deref(),
            _ => None,
        }
    }
}
