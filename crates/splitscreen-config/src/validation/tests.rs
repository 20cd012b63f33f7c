//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = SplitscreenConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_pane_count_zero() {
    let mut config = SplitscreenConfig::default();
    config.panes.initial_count = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("panes.initial_count"));
}

#[test]
fn catches_pane_count_above_max() {
    let mut config = SplitscreenConfig::default();
    config.panes.initial_count = 5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("panes.initial_count"));
}

#[test]
fn catches_unmuted_beyond_pane_count() {
    let mut config = SplitscreenConfig::default();
    config.panes.initial_count = 2;
    config.panes.initial_unmuted = 3;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("panes.initial_unmuted"));
}

#[test]
fn unmuted_zero_is_valid() {
    let mut config = SplitscreenConfig::default();
    config.panes.initial_unmuted = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_non_http_url() {
    let mut config = SplitscreenConfig::default();
    config.panes.default_url = "file:///etc/passwd".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("panes.default_url"));
}

#[test]
fn catches_empty_selector() {
    let mut config = SplitscreenConfig::default();
    config.panes.hidden_selectors.push("  ".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("panes.hidden_selectors"));
}

#[test]
fn catches_zero_resume_delay() {
    let mut config = SplitscreenConfig::default();
    config.timing.resume_delay_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("timing.resume_delay_ms"));
}

#[test]
fn catches_idle_threshold_below_tick() {
    let mut config = SplitscreenConfig::default();
    config.timing.idle_threshold_ms = 500;
    config.timing.idle_tick_ms = 1000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("timing.idle_threshold_ms"));
}

#[test]
fn catches_pane_gap_too_large() {
    let mut config = SplitscreenConfig::default();
    config.window.pane_gap = 25;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.pane_gap"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SplitscreenConfig::default();
    config.panes.initial_count = 0;
    config.timing.resume_delay_ms = 0;
    config.window.width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("panes.initial_count"));
    assert!(err.contains("timing.resume_delay_ms"));
    assert!(err.contains("window.width"));
}
