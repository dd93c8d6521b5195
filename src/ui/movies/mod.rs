mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::MovieListIntent;
pub use reducer::MovieListReducer;
pub use screen::MovieListScreen;
pub use state::MovieListState;
