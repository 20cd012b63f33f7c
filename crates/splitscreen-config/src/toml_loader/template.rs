//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Splitscreen Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[panes]
# default_url = "https://the.streameast.app"
# initial_count = 1          # 1-4
# initial_unmuted = 1        # 0 = all muted, otherwise 1..initial_count
# hidden_selectors = [".site-nav"]
# user_agent = "Mozilla/5.0 ..."
# report_interactions = true

[timing]
# mute_settle_ms = 1500      # force-mute -> apply requested flag
# resume_delay_ms = 1000     # apply -> resume playback, must be > 0
# idle_threshold_ms = 5000   # chrome hides after this much inactivity
# idle_tick_ms = 1000
# page_poll_ms = 1000        # in-page video scan period
# interaction_throttle_ms = 250

[window]
# title = "TV Splitscreen"
# width = 1280
# height = 800
# hide_title_bar = true
# hide_cursor_when_idle = true
# menu_open_on_start = true
# pane_gap = 0               # 0-20

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
