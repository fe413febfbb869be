//! Page-space geometry for intersection tests.
//!
//! All coordinates are measured from the top of the page in host units
//! (CSS pixels for the browser, rows for the terminal viewer).

/// Vertical extent of a block on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub top: i64,
    pub height: u32,
}

impl Bounds {
    pub fn new(top: i64, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> i64 {
        self.top + i64::from(self.height)
    }
}

/// The visible slice of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_top: i64,
    pub height: u32,
}

impl Viewport {
    pub fn new(scroll_top: i64, height: u32) -> Self {
        Self { scroll_top, height }
    }

    /// Returns the viewport scrolled by `delta` units.
    pub fn scrolled_by(self, delta: i64) -> Self {
        Self {
            scroll_top: self.scroll_top + delta,
            ..self
        }
    }

    /// Top and bottom edges after shrinking every side by the margin.
    pub fn effective_edges(&self, margin: TriggerMargin) -> (i64, i64) {
        let inset = i64::from(margin.inset());
        (
            self.scroll_top + inset,
            self.scroll_top + i64::from(self.height) - inset,
        )
    }

    /// Whether `bounds` overlaps the margin-adjusted viewport.
    ///
    /// Edge-adjacent blocks count as intersecting.
    pub fn intersects(&self, bounds: Bounds, margin: TriggerMargin) -> bool {
        let (top, bottom) = self.effective_edges(margin);
        bounds.top <= bottom && bounds.bottom() >= top
    }
}

/// Offset applied to the viewport edges before intersection tests.
///
/// Always zero or negative: a negative margin shrinks the viewport so a
/// block triggers only once it is that far inside the visible area.
/// Positive inputs are clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerMargin(i32);

impl TriggerMargin {
    pub fn new(value: i32) -> Self {
        Self(value.min(0))
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Distance each viewport edge moves inward.
    pub fn inset(self) -> u32 {
        self.0.unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_margin_is_clamped() {
        assert_eq!(TriggerMargin::new(20).get(), 0);
        assert_eq!(TriggerMargin::new(-50).get(), -50);
        assert_eq!(TriggerMargin::new(-50).inset(), 50);
    }

    #[test]
    fn margin_shrinks_both_edges() {
        let viewport = Viewport::new(100, 800);
        let shrunk = viewport.effective_edges(TriggerMargin::new(-50));
        assert_eq!(shrunk, (150, 850));
        let full = viewport.effective_edges(TriggerMargin::default());
        assert_eq!(full, (100, 900));
    }

    #[test]
    fn block_below_threshold_does_not_intersect() {
        let viewport = Viewport::new(0, 800);
        let block = Bounds::new(820, 100);
        assert!(!viewport.intersects(block, TriggerMargin::new(-50)));
        let scrolled = viewport.scrolled_by(70);
        assert!(scrolled.intersects(block, TriggerMargin::new(-50)));
    }

    #[test]
    fn block_above_viewport_does_not_intersect() {
        let viewport = Viewport::new(1000, 800);
        let block = Bounds::new(0, 900);
        assert!(!viewport.intersects(block, TriggerMargin::new(-50)));
        assert!(!viewport.intersects(block, TriggerMargin::new(-100)));
        let tall = Bounds::new(0, 1050);
        assert!(viewport.intersects(tall, TriggerMargin::new(-50)));
    }

    #[test]
    fn zero_height_block_inside_counts() {
        let viewport = Viewport::new(0, 10);
        let flat = Bounds::new(5, 0);
        assert!(viewport.intersects(flat, TriggerMargin::default()));
    }
}
