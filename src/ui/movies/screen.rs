use crate::api::{ApiClient, Director, FavoriteOutcome, Genre};
use crate::ui::dialog::DetailDialog;
use crate::ui::movies::intent::MovieListIntent;
use crate::ui::movies::reducer::MovieListReducer;
use crate::ui::movies::state::MovieListState;
use crate::ui::mvi::Reducer;
use crate::ui::nav::{Navigation, Route};

/// Movie list screen: requires a cached user, lists every movie, and lets
/// the user open details and toggle favorites.
#[derive(Debug, Default)]
pub struct MovieListScreen {
    state: MovieListState,
}

impl MovieListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MovieListState {
        &self.state
    }

    fn dispatch(&mut self, intent: MovieListIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = MovieListReducer::reduce(state, intent);
    }

    /// Redirect to the landing screen without a cached user, otherwise
    /// load the movie list.
    pub async fn init(&mut self, client: &ApiClient) -> Navigation {
        if !client.session().has_user() {
            return Navigation::Redirect(Route::Welcome);
        }

        self.dispatch(MovieListIntent::LoadStarted);
        let intent = match client.list_movies().await {
            Ok(movies) => MovieListIntent::Loaded { movies },
            Err(e) => MovieListIntent::LoadFailed {
                message: e.user_message().to_string(),
            },
        };
        self.dispatch(intent);
        Navigation::Stay
    }

    pub fn open_genre(&mut self, genre: &Genre) {
        self.dispatch(MovieListIntent::OpenDialog(DetailDialog::genre(genre)));
    }

    pub fn open_director(&mut self, director: &Director) {
        self.dispatch(MovieListIntent::OpenDialog(DetailDialog::director(director)));
    }

    pub fn open_synopsis(&mut self, synopsis: &str) {
        self.dispatch(MovieListIntent::OpenDialog(DetailDialog::synopsis(synopsis)));
    }

    pub fn close_dialog(&mut self) {
        self.dispatch(MovieListIntent::CloseDialog);
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(MovieListIntent::DismissNotice);
    }

    pub fn is_favorite(&self, client: &ApiClient, movie_id: &str) -> bool {
        client.is_favorite(movie_id)
    }

    /// Toggle a favorite and post the matching notice.
    pub async fn toggle_favorite(&mut self, client: &ApiClient, movie_id: &str) -> FavoriteOutcome {
        let outcome = client.toggle_favorite(movie_id).await;
        if let Some(kind) = outcome.error {
            tracing::warn!(movie_id, error = ?kind, "Favorite toggle failed");
        }
        self.dispatch(MovieListIntent::FavoriteToggled(outcome.clone()));
        outcome
    }
}
