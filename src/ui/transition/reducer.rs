//! Reducer for the transition guard.

use crate::ui::mvi::Reducer;

use super::intent::TransitionIntent;
use super::state::TransitionState;

/// Reducer for transition guard state transitions.
///
/// Pure function — dropping the draw request that arrives during a window
/// is handled by the caller around the dispatch call.
pub struct TransitionReducer;

impl Reducer for TransitionReducer {
    type State = TransitionState;
    type Intent = TransitionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TransitionIntent::Start { now, duration } => match state {
                TransitionState::Idle => TransitionState::Transitioning {
                    until: now + duration,
                },
                // A running window keeps its original deadline
                transitioning => transitioning,
            },

            TransitionIntent::TimerElapsed { now } => match state {
                TransitionState::Transitioning { until } if now >= until => {
                    TransitionState::Idle
                }
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    const WINDOW: Duration = Duration::from_millis(800);

    #[test]
    fn start_from_idle_opens_the_window() {
        let now = Instant::now();
        let new = TransitionReducer::reduce(
            TransitionState::Idle,
            TransitionIntent::Start { now, duration: WINDOW },
        );
        assert_eq!(new, TransitionState::Transitioning { until: now + WINDOW });
    }

    #[test]
    fn start_while_transitioning_keeps_the_original_deadline() {
        let now = Instant::now();
        let state = TransitionState::Transitioning { until: now + WINDOW };
        let new = TransitionReducer::reduce(
            state,
            TransitionIntent::Start {
                now: now + Duration::from_millis(100),
                duration: WINDOW,
            },
        );
        assert_eq!(new, TransitionState::Transitioning { until: now + WINDOW });
    }

    #[test]
    fn timer_before_the_deadline_keeps_transitioning() {
        let now = Instant::now();
        let state = TransitionState::Transitioning { until: now + WINDOW };
        let new = TransitionReducer::reduce(
            state,
            TransitionIntent::TimerElapsed {
                now: now + WINDOW - Duration::from_millis(1),
            },
        );
        assert!(new.is_transitioning());
    }

    #[test]
    fn timer_at_the_deadline_returns_to_idle() {
        let now = Instant::now();
        let state = TransitionState::Transitioning { until: now + WINDOW };
        let new = TransitionReducer::reduce(
            state,
            TransitionIntent::TimerElapsed { now: now + WINDOW },
        );
        assert_eq!(new, TransitionState::Idle);
    }

    #[test]
    fn timer_after_the_deadline_returns_to_idle() {
        let now = Instant::now();
        let state = TransitionState::Transitioning { until: now + WINDOW };
        let new = TransitionReducer::reduce(
            state,
            TransitionIntent::TimerElapsed {
                now: now + WINDOW + Duration::from_secs(1),
            },
        );
        assert_eq!(new, TransitionState::Idle);
    }

    #[test]
    fn timer_while_idle_is_noop() {
        let new = TransitionReducer::reduce(
            TransitionState::Idle,
            TransitionIntent::TimerElapsed { now: Instant::now() },
        );
        assert_eq!(new, TransitionState::Idle);
    }
}
