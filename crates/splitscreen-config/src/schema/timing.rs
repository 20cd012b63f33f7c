//! Timing knobs for the mute settle sequence, idle chrome and page polling.
//!
//! The defaults are tuned for one renderer/site combination; the only hard
//! requirement is that playback resumes strictly after the unmute settles.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing configuration, all values in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between forcing mute and applying the requested flag.
    pub mute_settle_ms: u32,
    /// Delay after the settle before playback is resumed (must be > 0).
    pub resume_delay_ms: u32,
    /// Chrome hides after this long without interaction.
    pub idle_threshold_ms: u32,
    /// Period of the idle ticker.
    pub idle_tick_ms: u32,
    /// Period of the in-page video scan.
    pub page_poll_ms: u32,
    /// Minimum gap between in-page interaction reports.
    pub interaction_throttle_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            mute_settle_ms: 1500,
            resume_delay_ms: 1000,
            idle_threshold_ms: 5000,
            idle_tick_ms: 1000,
            page_poll_ms: 1000,
            interaction_throttle_ms: 250,
        }
    }
}

impl TimingConfig {
    pub fn mute_settle(&self) -> Duration {
        Duration::from_millis(self.mute_settle_ms as u64)
    }

    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms as u64)
    }

    pub fn idle_threshold(&self) -> Duration {
        Duration::from_millis(self.idle_threshold_ms as u64)
    }

    pub fn idle_tick(&self) -> Duration {
        Duration::from_millis(self.idle_tick_ms as u64)
    }
}
