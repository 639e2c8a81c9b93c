//! State for the favorites overlay panel.

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoritesPanelState {
    #[default]
    Hidden,

    Visible {
        /// Index of the highlighted row within the favorites list.
        selected: usize,
        /// First visible row when the list exceeds the panel height.
        offset: usize,
    },
}

impl UiState for FavoritesPanelState {}

impl FavoritesPanelState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            Self::Visible { selected, .. } => Some(*selected),
            Self::Hidden => None,
        }
    }
}
