use std::time::Instant;

use crate::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum RevealIntent {
    /// The block intersected the margin-adjusted viewport at `at`.
    Entered { at: Instant },
    /// The block stopped intersecting. Never un-reveals a block.
    Left,
}

impl Intent for RevealIntent {}
