//! State for the quote-swap transition guard.

use crate::ui::mvi::UiState;
use std::time::Instant;

/// Transition guard state machine.
///
/// A new quote enters Transitioning for a fixed window; draw requests
/// arriving inside the window are dropped by the caller. The card renders
/// dimmed while the window runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionState {
    #[default]
    Idle,

    /// A quote swap is on screen; the guard clears once `until` is reached.
    Transitioning { until: Instant },
}

impl UiState for TransitionState {}

impl TransitionState {
    /// Check whether draw requests should currently be dropped.
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Transitioning { .. })
    }
}
