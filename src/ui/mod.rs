//! Terminal UI: rendering, input, and the per-feature MVI state machines.

pub mod app;
pub mod events;
pub mod favorites;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod toast;
pub mod transition;

pub use app::{App, UiTimings};
pub use runtime::run;
