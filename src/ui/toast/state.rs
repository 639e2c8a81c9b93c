//! State for toast notifications.

use crate::ui::mvi::UiState;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToastState {
    #[default]
    Hidden,

    Shown {
        message: String,
        kind: ToastKind,
        until: Instant,
    },
}

impl UiState for ToastState {}

impl ToastState {
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown { .. })
    }
}
