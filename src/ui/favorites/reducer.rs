//! Reducer for the favorites overlay panel.

use crate::ui::mvi::Reducer;

use super::intent::FavoritesPanelIntent;
use super::state::FavoritesPanelState;

/// Rows shown at once; longer lists scroll.
pub const MAX_VISIBLE_ROWS: usize = 8;

pub struct FavoritesPanelReducer;

impl Reducer for FavoritesPanelReducer {
    type State = FavoritesPanelState;
    type Intent = FavoritesPanelIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesPanelIntent::Open => FavoritesPanelState::Visible {
                selected: 0,
                offset: 0,
            },

            FavoritesPanelIntent::Close => FavoritesPanelState::Hidden,

            FavoritesPanelIntent::MoveUp => match state {
                FavoritesPanelState::Visible { selected, offset } => {
                    let selected = selected.saturating_sub(1);
                    FavoritesPanelState::Visible {
                        selected,
                        offset: scrolled(selected, offset),
                    }
                }
                hidden => hidden,
            },

            FavoritesPanelIntent::MoveDown { len } => match state {
                FavoritesPanelState::Visible { selected, offset } => {
                    let selected = (selected + 1).min(len.saturating_sub(1));
                    FavoritesPanelState::Visible {
                        selected,
                        offset: scrolled(selected, offset),
                    }
                }
                hidden => hidden,
            },

            FavoritesPanelIntent::Removed { len } => match state {
                FavoritesPanelState::Visible { selected, offset } => {
                    let selected = selected.min(len.saturating_sub(1));
                    FavoritesPanelState::Visible {
                        selected,
                        offset: scrolled(selected, offset.min(selected)),
                    }
                }
                hidden => hidden,
            },
        }
    }
}

/// Adjust the scroll offset so the selected row stays visible.
fn scrolled(selected: usize, offset: usize) -> usize {
    if selected < offset {
        selected
    } else if selected >= offset + MAX_VISIBLE_ROWS {
        selected + 1 - MAX_VISIBLE_ROWS
    } else {
        offset
    }
}
