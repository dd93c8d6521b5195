use crate::ui::movies::intent::MovieListIntent;
use crate::ui::movies::state::MovieListState;
use crate::ui::mvi::Reducer;

pub struct MovieListReducer;

impl Reducer for MovieListReducer {
    type State = MovieListState;
    type Intent = MovieListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MovieListIntent::LoadStarted => MovieListState::Loading,
            MovieListIntent::Loaded { movies } => MovieListState::Loaded {
                movies,
                dialog: None,
                notice: None,
            },
            MovieListIntent::LoadFailed { message } => MovieListState::Failed { message },
            MovieListIntent::OpenDialog(new_dialog) => match state {
                MovieListState::Loaded { movies, notice, .. } => MovieListState::Loaded {
                    movies,
                    dialog: Some(new_dialog),
                    notice,
                },
                other => other,
            },
            MovieListIntent::CloseDialog => match state {
                MovieListState::Loaded { movies, notice, .. } => MovieListState::Loaded {
                    movies,
                    dialog: None,
                    notice,
                },
                other => other,
            },
            MovieListIntent::FavoriteToggled(outcome) => match state {
                MovieListState::Loaded { movies, dialog, .. } => MovieListState::Loaded {
                    movies,
                    dialog,
                    notice: Some(outcome.notice().to_string()),
                },
                other => other,
            },
            MovieListIntent::DismissNotice => match state {
                MovieListState::Loaded { movies, dialog, .. } => MovieListState::Loaded {
                    movies,
                    dialog,
                    notice: None,
                },
                other => other,
            },
        }
    }
}
