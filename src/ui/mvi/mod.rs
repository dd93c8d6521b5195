//! Model-View-Intent primitives for the screens.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Screens own a state value and feed it intents: user actions (open a
//! dialog, edit a field) and API results (movies loaded, favorite toggled).
//! Network calls happen in the screen, never in the reducer.

/// Renderable screen state.
///
/// States are plain values: cloned to produce the next state, compared to
/// detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or an API result fed to a reducer.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
