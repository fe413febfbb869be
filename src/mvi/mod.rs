//! Model-View-Intent (MVI) primitives.
//!
//! Both the reveal state machine and the viewer's scroll position are
//! driven through these traits:
//!
//! ```text
//! scroll / key / resize ─→ Intent ─→ Reducer ─→ State ─→ frame
//! ```
//!
//! - **State**: value describing one piece of page state
//! - **Intent**: an observed event (intersection, key press, resize)
//! - **Reducer**: pure function producing the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
