//! Toast notification feature module.
//!
//! Short feedback messages ("Added to favorites", "Copied to clipboard")
//! shown for a fixed duration. A newer toast replaces the current one.

mod intent;
mod reducer;
mod state;

pub use intent::ToastIntent;
pub use reducer::ToastReducer;
pub use state::{ToastKind, ToastState};
