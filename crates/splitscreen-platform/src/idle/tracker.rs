use std::time::{Duration, Instant};

use splitscreen_common::InteractionKind;
use tracing::debug;

/// Whether the chrome is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleState {
    Active,
    Idle,
}

/// Edge produced when the tracker changes state.
///
/// Callers hang side effects (cursor hiding, overlay visibility) off these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeTransition {
    Shown,
    Hidden,
}

/// Decaying idle timer driving chrome visibility.
///
/// Interactions flip IDLE -> ACTIVE immediately. Only [`tick`](Self::tick)
/// performs ACTIVE -> IDLE, once `idle_threshold` has elapsed since the
/// last interaction.
#[derive(Debug, Clone)]
pub struct InteractionTracker {
    idle_threshold: Duration,
    last_interaction: Instant,
    state: IdleState,
}

impl InteractionTracker {
    /// Start ACTIVE, as if an interaction happened at `now`.
    pub fn new(idle_threshold: Duration, now: Instant) -> Self {
        Self {
            idle_threshold,
            last_interaction: now,
            state: IdleState::Active,
        }
    }

    /// Record a raw interaction. Returns `Shown` if this woke the chrome.
    pub fn record(&mut self, kind: InteractionKind, now: Instant) -> Option<ChromeTransition> {
        if now > self.last_interaction {
            self.last_interaction = now;
        }
        match self.state {
            IdleState::Active => None,
            IdleState::Idle => {
                debug!(?kind, "chrome woken by interaction");
                self.state = IdleState::Active;
                Some(ChromeTransition::Shown)
            }
        }
    }

    /// Re-evaluate elapsed time. Returns `Hidden` exactly once per idle period.
    pub fn tick(&mut self, now: Instant) -> Option<ChromeTransition> {
        if self.state == IdleState::Active && self.idle_for(now) >= self.idle_threshold {
            debug!(threshold_ms = self.idle_threshold.as_millis() as u64, "chrome idle");
            self.state = IdleState::Idle;
            return Some(ChromeTransition::Hidden);
        }
        None
    }

    pub fn chrome_visible(&self) -> bool {
        self.state == IdleState::Active
    }

    pub fn state(&self) -> IdleState {
        self.state
    }

    /// Time since the last recorded interaction.
    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_interaction)
    }
}
