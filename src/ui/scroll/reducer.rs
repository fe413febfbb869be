//! Reducer for the viewer scroll position.

use crate::mvi::Reducer;

use super::intent::ScrollIntent;
use super::state::ScrollState;

/// Moves the scroll offset, always clamped to `[0, max_offset]`.
pub struct ScrollReducer;

impl Reducer for ScrollReducer {
    type State = ScrollState;
    type Intent = ScrollIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let page = i64::from(state.viewport_height.saturating_sub(1).max(1));
        let next = match intent {
            ScrollIntent::LineUp => ScrollState {
                offset: state.offset - 1,
                ..state
            },
            ScrollIntent::LineDown => ScrollState {
                offset: state.offset + 1,
                ..state
            },
            ScrollIntent::PageUp => ScrollState {
                offset: state.offset - page,
                ..state
            },
            ScrollIntent::PageDown => ScrollState {
                offset: state.offset + page,
                ..state
            },
            ScrollIntent::Top => ScrollState { offset: 0, ..state },
            ScrollIntent::Bottom => ScrollState {
                offset: state.max_offset(),
                ..state
            },
            ScrollIntent::JumpTo { row } => ScrollState { offset: row, ..state },
            ScrollIntent::Resize {
                content_height,
                viewport_height,
            } => ScrollState {
                offset: state.offset,
                content_height,
                viewport_height,
            },
        };
        ScrollState {
            offset: next.offset.clamp(0, next.max_offset()),
            ..next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(offset: i64) -> ScrollState {
        ScrollState {
            offset,
            content_height: 100,
            viewport_height: 20,
        }
    }

    #[test]
    fn line_up_stops_at_top() {
        let next = ScrollReducer::reduce(state(0), ScrollIntent::LineUp);
        assert_eq!(next.offset, 0);
    }

    #[test]
    fn page_down_moves_by_viewport_minus_one() {
        let next = ScrollReducer::reduce(state(0), ScrollIntent::PageDown);
        assert_eq!(next.offset, 19);
    }

    #[test]
    fn bottom_and_jump_are_clamped() {
        let bottom = ScrollReducer::reduce(state(0), ScrollIntent::Bottom);
        assert_eq!(bottom.offset, 80);
        assert_eq!(
            ScrollReducer::reduce(state(0), ScrollIntent::JumpTo { row: 500 }).offset,
            80
        );
        assert_eq!(
            ScrollReducer::reduce(state(10), ScrollIntent::JumpTo { row: -3 }).offset,
            0
        );
    }

    #[test]
    fn resize_reclamps_offset() {
        let next = ScrollReducer::reduce(
            state(80),
            ScrollIntent::Resize {
                content_height: 50,
                viewport_height: 20,
            },
        );
        assert_eq!(next.offset, 30);
        assert!(next.at_bottom());
    }

    #[test]
    fn short_content_never_scrolls() {
        let short = ScrollState {
            offset: 0,
            content_height: 10,
            viewport_height: 20,
        };
        let next = ScrollReducer::reduce(short, ScrollIntent::PageDown);
        assert_eq!(next.offset, 0);
    }
}
