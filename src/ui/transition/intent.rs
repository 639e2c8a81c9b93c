//! Intents for the transition guard.

use crate::ui::mvi::Intent;
use std::time::{Duration, Instant};

/// Intents that can be dispatched to the transition reducer.
#[derive(Debug)]
pub enum TransitionIntent {
    /// A quote swap began; open the guard window.
    /// Ignored while a window is already running.
    Start { now: Instant, duration: Duration },

    /// Periodic tick; closes the window once its deadline has passed.
    TimerElapsed { now: Instant },
}

impl Intent for TransitionIntent {}
