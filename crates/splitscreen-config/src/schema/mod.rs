//! Configuration schema types for Splitscreen.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod panes;
mod system;
mod timing;
mod window;

pub use panes::*;
pub use system::*;
pub use timing::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Splitscreen.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SplitscreenConfig {
    pub panes: PanesConfig,
    pub timing: TimingConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: SplitscreenConfig = toml::from_str("").unwrap();
        assert_eq!(config.panes.initial_count, 1);
        assert_eq!(config.timing.idle_threshold_ms, 5000);
        assert!(config.window.menu_open_on_start);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let toml_str = r#"
[panes]
default_url = "https://example.com/live"

[timing]
idle_threshold_ms = 8000
"#;
        let config: SplitscreenConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.panes.default_url, "https://example.com/live");
        assert_eq!(config.timing.idle_threshold_ms, 8000);
        assert_eq!(config.timing.mute_settle_ms, 1500);
        assert_eq!(config.window.title, "TV Splitscreen");
    }
}
