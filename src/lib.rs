//! quoterm: a terminal quote viewer.
//!
//! Displays random quotes from a fixed in-memory dataset, filters them by
//! category, persists favorites to a local JSON file, and copies or shares
//! the current quote. The domain modules (`catalog`, `selection`,
//! `favorites`, `session`) have no terminal dependency; the `ui` tree owns
//! all rendering and input handling.

pub mod catalog;
pub mod config;
pub mod favorites;
pub mod selection;
pub mod session;
pub mod share;
pub mod storage;
pub mod ui;
