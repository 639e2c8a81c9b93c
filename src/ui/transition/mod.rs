//! Quote-swap transition guard feature module.
//!
//! While a fade window is running, further draw requests are dropped —
//! no queueing, no error. The original's boolean flag is modeled as an
//! explicit two-state machine so the drop policy is testable on its own.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Guard state enum (Idle ⇄ Transitioning)
//! - `intent.rs` - Triggers (Start, TimerElapsed)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::TransitionIntent;
pub use reducer::TransitionReducer;
pub use state::TransitionState;
