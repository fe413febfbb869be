//! Intersection change notifications.
//!
//! The observer is the event source the reveal controller subscribes
//! to. It only reports a target when its intersecting flag differs from
//! the last one delivered, so the controller never scans positions on
//! every scroll. A freshly observed target always gets one initial
//! record, which is how content already on screen gets revealed.

use std::collections::BTreeMap;

use super::geometry::{Bounds, TriggerMargin, Viewport};
use super::BlockId;

/// One intersection change for an observed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target: BlockId,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone)]
struct Target {
    bounds: Bounds,
    margin: TriggerMargin,
    /// Last flag handed out. `None` until the initial record.
    delivered: Option<bool>,
}

#[derive(Debug, Default)]
pub struct IntersectionObserver {
    targets: BTreeMap<BlockId, Target>,
}

impl IntersectionObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts observing `target`. Re-observing resets delivery so the
    /// target receives a fresh initial record.
    pub fn observe(&mut self, target: BlockId, bounds: Bounds, margin: TriggerMargin) {
        self.targets.insert(
            target,
            Target {
                bounds,
                margin,
                delivered: None,
            },
        );
    }

    /// Stops observing `target`. Returns false if it was not observed.
    pub fn unobserve(&mut self, target: BlockId) -> bool {
        self.targets.remove(&target).is_some()
    }

    /// Updates the bounds of an observed target after a layout change.
    pub fn relayout(&mut self, target: BlockId, bounds: Bounds) -> bool {
        match self.targets.get_mut(&target) {
            Some(entry) => {
                entry.bounds = bounds;
                true
            }
            None => false,
        }
    }

    pub fn is_observing(&self, target: BlockId) -> bool {
        self.targets.contains_key(&target)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Computes the pending change records for `viewport`, in target
    /// order, and marks them delivered.
    pub fn take_records(&mut self, viewport: Viewport) -> Vec<IntersectionEntry> {
        let mut records = Vec::new();
        for (&id, target) in self.targets.iter_mut() {
            let is_intersecting = viewport.intersects(target.bounds, target.margin);
            if target.delivered != Some(is_intersecting) {
                target.delivered = Some(is_intersecting);
                records.push(IntersectionEntry {
                    target: id,
                    is_intersecting,
                });
            }
        }
        records
    }
}
