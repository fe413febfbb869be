//! Personal portfolio page with reveal-on-scroll blocks.
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `portfolio.toml` loading, validation, built-in sample |
//! | [`page`] | Presentation model and static HTML output |
//! | [`reveal`] | One-shot reveal controller driven by intersection changes |
//! | [`ui`] | Terminal viewer hosting the page |
//! | [`mvi`] | State / intent / reducer traits |

pub mod config;
pub mod logging;
pub mod mvi;
pub mod page;
pub mod reveal;
pub mod ui;
