//! Favorites overlay panel feature module.
//!
//! A centered modal listing the saved quotes with a movable selection.
//! The list itself lives in the session; the panel state only tracks
//! visibility, the selected row, and the scroll offset.

mod intent;
mod panel;
mod reducer;
mod state;

pub use intent::FavoritesPanelIntent;
pub use panel::render_favorites_panel;
pub use reducer::{FavoritesPanelReducer, MAX_VISIBLE_ROWS};
pub use state::FavoritesPanelState;
