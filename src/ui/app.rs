use crate::config::{Portfolio, RevealSettings};
use crate::mvi::Reducer;
use crate::page::{Page, SCROLL_HINT_TRANSITION};
use crate::reveal::{BlockId, RevealController, RevealOptions};
use crate::ui::page_layout::{PageLayout, ROW_HEIGHT_PX};
use crate::ui::scroll::{ScrollIntent, ScrollReducer, ScrollState};
use std::time::Instant;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Terminal viewer state: the page, its layout, the scroll position and
/// the reveal controller watching every block.
pub struct App {
    should_quit: bool,
    page: Page,
    layout: PageLayout,
    /// Scroll position (MVI pattern).
    scroll: ScrollState,
    reveals: RevealController,
    options: RevealOptions,
    mounted_at: Instant,
}

impl App {
    /// Builds the page for a body of `cols` x `rows`, registers every block
    /// and reveals whatever is already on screen.
    pub fn new(portfolio: &Portfolio, cols: u16, rows: u16, now: Instant) -> Self {
        let page = Page::build(portfolio);
        let layout = PageLayout::build(&page, cols, rows);
        let mut app = Self {
            should_quit: false,
            page,
            layout,
            scroll: ScrollState::default(),
            reveals: RevealController::new(),
            options: row_options(&portfolio.reveal),
            mounted_at: now,
        };
        app.mount_blocks();
        app.sync_scroll(rows);
        app.deliver(now);
        app
    }

    fn mount_blocks(&mut self) {
        for block in &self.layout.blocks {
            let section = block.anchor.unwrap_or("hero");
            self.reveals.register(block.id, block.bounds(), self.options, move |id| {
                tracing::info!(block = id.0, section, "block revealed");
            });
        }
    }

    fn sync_scroll(&mut self, rows: u16) {
        dispatch_mvi!(
            self,
            scroll,
            ScrollReducer,
            ScrollIntent::Resize {
                content_height: self.layout.height(),
                viewport_height: u32::from(rows),
            }
        );
    }

    /// Feeds the current viewport to the controller.
    fn deliver(&mut self, now: Instant) -> Vec<BlockId> {
        self.reveals.on_viewport(self.scroll.viewport(), now)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    pub fn reveals(&self) -> &RevealController {
        &self.reveals
    }

    /// Applies a scroll intent and reports any newly revealed blocks.
    pub fn scroll(&mut self, intent: ScrollIntent, now: Instant) -> Vec<BlockId> {
        dispatch_mvi!(self, scroll, ScrollReducer, intent);
        self.deliver(now)
    }

    /// Follows an in-page link to `anchor`. Unknown anchors are ignored.
    pub fn jump_to_anchor(&mut self, anchor: &str, now: Instant) -> Vec<BlockId> {
        match self.layout.anchor_row(anchor) {
            Some(row) => self.scroll(ScrollIntent::JumpTo { row }, now),
            None => Vec::new(),
        }
    }

    /// Re-lays the page for a new body size. Revealed blocks stay revealed.
    pub fn on_resize(&mut self, cols: u16, rows: u16, now: Instant) -> Vec<BlockId> {
        self.layout = PageLayout::build(&self.page, cols, rows);
        for block in &self.layout.blocks {
            self.reveals.relayout(block.id, block.bounds());
        }
        self.sync_scroll(rows);
        self.deliver(now)
    }

    /// True while something on screen is still animating.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.reveals.is_animating(now)
            || !SCROLL_HINT_TRANSITION.is_finished(now.saturating_duration_since(self.mounted_at))
    }

    /// Opacity of the hero's scroll hint, which fades in after mount.
    pub fn scroll_hint_opacity(&self, now: Instant) -> f32 {
        SCROLL_HINT_TRANSITION.progress(now.saturating_duration_since(self.mounted_at))
    }
}

/// Reveal options in rows.
fn row_options(settings: &RevealSettings) -> RevealOptions {
    RevealOptions::from_settings(settings, ROW_HEIGHT_PX)
}
