//! Transition timing and sampled reveal styles.

use std::time::Duration;

use crate::config::RevealSettings;

use super::geometry::TriggerMargin;

/// Timing curve for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    #[default]
    EaseOut,
}

impl Easing {
    /// Maps linear progress `t` in [0, 1] onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluates a CSS-style cubic bezier at horizontal position `x`.
///
/// x(s) is monotonic for control points in [0, 1], so bisection on the
/// curve parameter converges.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    fn axis(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut s = x;
    for _ in 0..32 {
        s = (lo + hi) / 2.0;
        if axis(x1, x2, s) < x {
            lo = s;
        } else {
            hi = s;
        }
    }
    axis(y1, y2, s)
}

/// Delay, duration and curve of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            duration: Duration::from_millis(600),
            easing: Easing::EaseOut,
        }
    }
}

impl Transition {
    /// Eased progress after `elapsed` since the transition was triggered.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        self.easing
            .apply(active.as_secs_f32() / self.duration.as_secs_f32())
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// Visual attributes of a block at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// 0.0 fully transparent, 1.0 opaque.
    pub opacity: f32,
    /// Distance below the resting position, in host units.
    pub offset: f32,
}

impl RevealStyle {
    pub const VISIBLE: RevealStyle = RevealStyle {
        opacity: 1.0,
        offset: 0.0,
    };

    pub fn hidden(offset: f32) -> Self {
        Self {
            opacity: 0.0,
            offset,
        }
    }

    /// Interpolates from `self` to `to` by `t` in [0, 1].
    pub fn lerp(self, to: RevealStyle, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset: self.offset + (to.offset - self.offset) * t,
        }
    }

    pub fn is_settled(&self) -> bool {
        *self == Self::VISIBLE
    }
}

/// Per-block reveal parameters in host units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub margin: TriggerMargin,
    pub transition: Transition,
    /// Starting offset of the hidden style.
    pub offset: f32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::from_settings(&RevealSettings::default(), 1.0)
    }
}

impl RevealOptions {
    /// Converts pixel settings into host units of `unit_px` pixels each.
    pub fn from_settings(settings: &RevealSettings, unit_px: f32) -> Self {
        let unit_px = if unit_px > 0.0 { unit_px } else { 1.0 };
        Self {
            margin: TriggerMargin::new((settings.margin_px as f32 / unit_px).round() as i32),
            transition: Transition {
                delay: Duration::from_millis(settings.delay_ms),
                duration: Duration::from_millis(settings.duration_ms),
                easing: Easing::EaseOut,
            },
            offset: settings.offset_px as f32 / unit_px,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.transition.delay = delay;
        self
    }

    /// Style `elapsed` after the block was revealed.
    pub fn style_after(&self, elapsed: Duration) -> RevealStyle {
        let progress = self.transition.progress(elapsed);
        RevealStyle::hidden(self.offset).lerp(RevealStyle::VISIBLE, progress)
    }
}
