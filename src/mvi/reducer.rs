//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure transition function from one state value to the next.
///
/// Side effects that accompany a transition (a reveal callback, a repaint)
/// belong to whoever dispatches the intent, never to the reducer.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Returns the state after applying `intent`. Intents that do not
    /// apply to `state` return it unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
