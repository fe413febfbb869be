use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollIntent {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// In-page link: bring `row` to the top of the viewport.
    JumpTo { row: i64 },
    /// Layout changed (terminal resize or relayout).
    Resize {
        content_height: u32,
        viewport_height: u32,
    },
}

impl Intent for ScrollIntent {}
