//! Idle tracking for the overlay chrome.
//!
//! [`InteractionTracker`] is a two-state machine (ACTIVE / IDLE) fed with
//! explicit clock readings so it can be driven by a simulated clock in tests.
//! [`IdleTicker`] is the recurring background task that prompts the
//! ACTIVE -> IDLE re-evaluation.

mod ticker;
mod tracker;

pub use ticker::IdleTicker;
pub use tracker::{ChromeTransition, IdleState, InteractionTracker};
