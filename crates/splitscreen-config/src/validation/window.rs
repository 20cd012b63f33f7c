//! Window section validation.

use crate::schema::SplitscreenConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &SplitscreenConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 16_384);
    validate_range(errors, "window.height", config.window.height, 200, 16_384);
    validate_range(errors, "window.pane_gap", config.window.pane_gap, 0, 20);
}
