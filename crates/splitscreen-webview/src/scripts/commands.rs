use super::PAGE_HANDLE;

/// One-shot: relocate the first `<video>` to the end of `<body>`.
pub fn move_video_script() -> String {
    format!("(function() {{ var page = {PAGE_HANDLE}; if (page) {{ page.moveVideo(); }} }})();")
}

/// Re-assert the pane's mute intent without the settle sequence.
///
/// Used after a page load so a freshly injected script picks up the
/// current intent instead of its build-time default.
pub fn apply_intent_script(muted: bool) -> String {
    format!("(function() {{ var page = {PAGE_HANDLE}; if (page) {{ page.muted = {muted}; }} }})();")
}
