//! Reducer for toast notifications.

use crate::ui::mvi::Reducer;

use super::intent::ToastIntent;
use super::state::ToastState;

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToastIntent::Show {
                message,
                kind,
                now,
                duration,
            } => ToastState::Shown {
                message,
                kind,
                until: now + duration,
            },

            ToastIntent::TimerElapsed { now } => match state {
                ToastState::Shown { until, .. } if now >= until => ToastState::Hidden,
                other => other,
            },
        }
    }
}
