//! Terminal viewer for the portfolio page.
//!
//! The terminal plays the browser's role: the page is laid out in rows,
//! the body scrolls, and every scroll or resize is fed to the
//! [`RevealController`](crate::reveal::RevealController), which reveals
//! blocks as they come into view.

pub mod app;
pub mod body;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod page_layout;
pub mod render;
pub mod runtime;
pub mod scroll;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
