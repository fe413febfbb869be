//! One-shot reveal-on-scroll controller.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use crate::mvi::Reducer;

use super::geometry::{Bounds, Viewport};
use super::intent::RevealIntent;
use super::motion::{RevealOptions, RevealStyle};
use super::observer::IntersectionObserver;
use super::reducer::RevealReducer;
use super::state::RevealState;
use super::BlockId;

/// Callback fired when a block is revealed. `FnOnce` because a block is
/// revealed at most once.
pub type OnVisible = Box<dyn FnOnce(BlockId)>;

/// A block known to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealBlock {
    pub id: BlockId,
    pub state: RevealState,
    pub options: RevealOptions,
}

impl RevealBlock {
    /// Visual attributes of the block at `now`.
    pub fn style_at(&self, now: Instant) -> RevealStyle {
        match self.state {
            RevealState::Hidden => RevealStyle::hidden(self.options.offset),
            RevealState::Visible { revealed_at } => self
                .options
                .style_after(now.saturating_duration_since(revealed_at)),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        match self.state {
            RevealState::Hidden => false,
            RevealState::Visible { revealed_at } => !self
                .options
                .transition
                .is_finished(now.saturating_duration_since(revealed_at)),
        }
    }
}

/// Watches registered blocks and reveals each the first time it
/// intersects the viewport.
///
/// The controller reacts only to change records from its
/// [`IntersectionObserver`]; hosts call [`RevealController::on_viewport`]
/// whenever the viewport moves or resizes.
#[derive(Default)]
pub struct RevealController {
    observer: IntersectionObserver,
    blocks: BTreeMap<BlockId, RevealBlock>,
    pending: HashMap<BlockId, OnVisible>,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts observing `id`.
    ///
    /// Returns false without doing anything when the block is already
    /// visible. A block that is inside the viewport at registration is
    /// revealed on the next [`on_viewport`](Self::on_viewport) call.
    pub fn register<F>(
        &mut self,
        id: BlockId,
        bounds: Bounds,
        options: RevealOptions,
        on_visible: F,
    ) -> bool
    where
        F: FnOnce(BlockId) + 'static,
    {
        if self.state(id).is_some_and(|state| state.is_visible()) {
            tracing::debug!(block = id.0, "register ignored, block already visible");
            return false;
        }

        self.blocks.insert(
            id,
            RevealBlock {
                id,
                state: RevealState::Hidden,
                options,
            },
        );
        self.observer.observe(id, bounds, options.margin);
        self.pending.insert(id, Box::new(on_visible));
        tracing::debug!(
            block = id.0,
            top = bounds.top,
            height = bounds.height,
            "registered block"
        );
        true
    }

    /// Stops observing `id` and drops its callback. Idempotent.
    pub fn unregister(&mut self, id: BlockId) {
        if self.observer.unobserve(id) {
            tracing::debug!(block = id.0, "unregistered block");
        }
        self.pending.remove(&id);
    }

    /// Updates the bounds of an observed block after a layout change.
    pub fn relayout(&mut self, id: BlockId, bounds: Bounds) {
        self.observer.relayout(id, bounds);
    }

    /// Delivers pending intersection changes for `viewport`.
    ///
    /// Returns the blocks revealed by this call, in page order.
    pub fn on_viewport(&mut self, viewport: Viewport, now: Instant) -> Vec<BlockId> {
        let mut revealed = Vec::new();
        for entry in self.observer.take_records(viewport) {
            let intent = if entry.is_intersecting {
                RevealIntent::Entered { at: now }
            } else {
                RevealIntent::Left
            };
            if self.dispatch(entry.target, intent) {
                revealed.push(entry.target);
            }
        }
        revealed
    }

    /// Runs the reducer for one block. Returns true on Hidden -> Visible.
    fn dispatch(&mut self, id: BlockId, intent: RevealIntent) -> bool {
        let Some(block) = self.blocks.get_mut(&id) else {
            return false;
        };
        let was_visible = block.state.is_visible();
        block.state = RevealReducer::reduce(block.state, intent);
        if was_visible || !block.state.is_visible() {
            return false;
        }

        let callback = self.pending.remove(&id);
        self.unregister(id);
        tracing::debug!(block = id.0, "revealed block");
        if let Some(callback) = callback {
            callback(id);
        }
        true
    }

    pub fn state(&self, id: BlockId) -> Option<RevealState> {
        self.blocks.get(&id).map(|block| block.state)
    }

    pub fn block(&self, id: BlockId) -> Option<&RevealBlock> {
        self.blocks.get(&id)
    }

    /// Style of `id` at `now`. Blocks the controller does not know are
    /// drawn as fully visible.
    pub fn style_at(&self, id: BlockId, now: Instant) -> RevealStyle {
        self.blocks
            .get(&id)
            .map_or(RevealStyle::VISIBLE, |block| block.style_at(now))
    }

    /// Style to paint `id` with at `now`, or `None` while it is hidden.
    ///
    /// Only blocks still mid-transition are sampled. Settled blocks and
    /// blocks the controller does not know paint with the resting style.
    pub fn paint_style(&self, id: BlockId, now: Instant) -> Option<RevealStyle> {
        let Some(block) = self.blocks.get(&id) else {
            return Some(RevealStyle::VISIBLE);
        };
        match block.state {
            RevealState::Hidden => None,
            RevealState::Visible { .. } if block.is_animating(now) => Some(block.style_at(now)),
            RevealState::Visible { .. } => Some(RevealStyle::VISIBLE),
        }
    }

    pub fn is_observing(&self, id: BlockId) -> bool {
        self.observer.is_observing(id)
    }

    /// True while any revealed block is still mid-transition.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.blocks.values().any(|block| block.is_animating(now))
    }

    pub fn blocks(&self) -> impl Iterator<Item = &RevealBlock> {
        self.blocks.values()
    }
}
