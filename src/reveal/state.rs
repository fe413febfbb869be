//! Reveal state of a single block.

use std::time::Instant;

use crate::mvi::UiState;

/// Reveal state machine: `Hidden --(intersection)--> Visible`.
///
/// `Visible` is terminal. No intent leads back to `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible {
        /// When the block first intersected the viewport.
        revealed_at: Instant,
    },
}

impl UiState for RevealState {}

impl RevealState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    pub fn revealed_at(&self) -> Option<Instant> {
        match self {
            Self::Visible { revealed_at } => Some(*revealed_at),
            Self::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hidden() {
        let state = RevealState::default();
        assert!(!state.is_visible());
        assert!(state.revealed_at().is_none());
    }

    #[test]
    fn visible_reports_instant() {
        let now = Instant::now();
        let state = RevealState::Visible { revealed_at: now };
        assert!(state.is_visible());
        assert_eq!(state.revealed_at(), Some(now));
    }
}
