//! Timing section validation.

use crate::schema::SplitscreenConfig;

use super::helpers::validate_range;

pub(crate) fn validate_timing(errors: &mut Vec<String>, config: &SplitscreenConfig) {
    let t = &config.timing;

    validate_range(errors, "timing.mute_settle_ms", t.mute_settle_ms, 0, 10_000);
    // Resume must land strictly after the settle.
    validate_range(errors, "timing.resume_delay_ms", t.resume_delay_ms, 1, 10_000);
    validate_range(errors, "timing.idle_tick_ms", t.idle_tick_ms, 50, 10_000);
    validate_range(errors, "timing.page_poll_ms", t.page_poll_ms, 100, 10_000);
    validate_range(
        errors,
        "timing.interaction_throttle_ms",
        t.interaction_throttle_ms,
        0,
        5_000,
    );

    if t.idle_threshold_ms < t.idle_tick_ms {
        errors.push(format!(
            "timing.idle_threshold_ms = {} must be at least timing.idle_tick_ms = {}",
            t.idle_threshold_ms, t.idle_tick_ms
        ));
    }
}
