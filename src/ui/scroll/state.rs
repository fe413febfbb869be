use crate::mvi::UiState;
use crate::reveal::Viewport;

/// Scroll position of the viewer over the laid-out page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// First page row shown in the body.
    pub offset: i64,
    pub content_height: u32,
    pub viewport_height: u32,
}

impl UiState for ScrollState {}

impl ScrollState {
    /// Largest valid offset.
    pub fn max_offset(&self) -> i64 {
        (i64::from(self.content_height) - i64::from(self.viewport_height)).max(0)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.offset, self.viewport_height)
    }

    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }
}
