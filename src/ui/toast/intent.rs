//! Intents for toast notifications.

use super::state::ToastKind;
use crate::ui::mvi::Intent;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub enum ToastIntent {
    /// Show a message, replacing any toast currently on screen.
    Show {
        message: String,
        kind: ToastKind,
        now: Instant,
        duration: Duration,
    },

    /// Periodic tick; clears the toast once its deadline has passed.
    TimerElapsed { now: Instant },
}

impl Intent for ToastIntent {}
