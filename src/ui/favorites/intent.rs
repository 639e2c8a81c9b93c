//! Intents for the favorites overlay panel.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the panel reducer. Movement intents
/// carry the current list length because the list lives in the session,
/// not in the panel state.
#[derive(Debug)]
pub enum FavoritesPanelIntent {
    /// Open the panel with the selection reset to the top.
    Open,

    /// Hide the panel.
    Close,

    /// Move the selection one row up, clamping at the top.
    MoveUp,

    /// Move the selection one row down, clamping at the bottom.
    MoveDown { len: usize },

    /// A favorite was deleted; re-clamp the selection to the new length.
    Removed { len: usize },
}

impl Intent for FavoritesPanelIntent {}
