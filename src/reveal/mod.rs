//! Reveal-on-scroll.
//!
//! Blocks start hidden and animate in the first time they intersect the
//! viewport, shrunk by a trigger margin. A revealed block stays revealed
//! no matter where the page scrolls afterwards.
//!
//! ```text
//! host scroll/resize ──→ IntersectionObserver ──→ change records
//!                                                     │
//!             RevealController ←─────────────────────┘
//!               │  RevealReducer: Hidden ──→ Visible (terminal)
//!               └─ on_visible callback (once), unregister
//! ```

mod controller;
mod geometry;
mod intent;
pub mod motion;
mod observer;
mod reducer;
mod state;

pub use controller::{OnVisible, RevealBlock, RevealController};
pub use geometry::{Bounds, TriggerMargin, Viewport};
pub use intent::RevealIntent;
pub use motion::{Easing, RevealOptions, RevealStyle, Transition};
pub use observer::{IntersectionEntry, IntersectionObserver};
pub use reducer::RevealReducer;
pub use state::RevealState;

/// Stable identity of a revealable block: its position on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub usize);
