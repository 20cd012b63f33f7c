//! Pane section validation (URL scheme, startup counts).

use splitscreen_common::MAX_PANES;

use crate::schema::SplitscreenConfig;

use super::helpers::validate_range;

pub(crate) fn validate_panes(errors: &mut Vec<String>, config: &SplitscreenConfig) {
    let panes = &config.panes;
    let max = MAX_PANES as u32;

    if !(panes.default_url.starts_with("https://") || panes.default_url.starts_with("http://")) {
        errors.push(format!(
            "panes.default_url = {:?} must be an http(s) URL",
            panes.default_url
        ));
    }

    validate_range(errors, "panes.initial_count", panes.initial_count, 1, max);
    validate_range(
        errors,
        "panes.initial_unmuted",
        panes.initial_unmuted,
        0,
        panes.initial_count.clamp(1, max),
    );

    if panes.hidden_selectors.iter().any(|s| s.trim().is_empty()) {
        errors.push("panes.hidden_selectors contains an empty selector".to_string());
    }
}
