//! Reducer for block reveal state.

use crate::mvi::Reducer;

use super::intent::RevealIntent;
use super::state::RevealState;

/// Pure transition function for [`RevealState`].
///
/// Callback invocation and unregistration are done by the controller
/// around the dispatch.
pub struct RevealReducer;

impl Reducer for RevealReducer {
    type State = RevealState;
    type Intent = RevealIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (RevealState::Hidden, RevealIntent::Entered { at }) => {
                RevealState::Visible { revealed_at: at }
            }
            // Visible is terminal; leaving the viewport changes nothing.
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn hidden_entered_becomes_visible() {
        let now = Instant::now();
        let state = RevealReducer::reduce(RevealState::Hidden, RevealIntent::Entered { at: now });
        assert_eq!(state, RevealState::Visible { revealed_at: now });
    }

    #[test]
    fn hidden_left_stays_hidden() {
        let state = RevealReducer::reduce(RevealState::Hidden, RevealIntent::Left);
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn visible_is_terminal() {
        let first = Instant::now();
        let visible = RevealState::Visible { revealed_at: first };

        let after_left = RevealReducer::reduce(visible, RevealIntent::Left);
        assert_eq!(after_left, visible);

        let later = first + Duration::from_secs(3);
        let after_reentry = RevealReducer::reduce(visible, RevealIntent::Entered { at: later });
        assert_eq!(after_reentry.revealed_at(), Some(first));
    }
}
