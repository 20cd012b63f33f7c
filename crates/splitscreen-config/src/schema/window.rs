//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance and chrome behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Hide the title bar text and let content run underneath it (macOS).
    pub hide_title_bar: bool,
    /// Hide the pointer while the chrome is idle.
    pub hide_cursor_when_idle: bool,
    /// Whether the overlay menu starts pinned open.
    pub menu_open_on_start: bool,
    /// Gap between panes in pixels (valid range: 0-20).
    pub pane_gap: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "TV Splitscreen".to_string(),
            width: 1280,
            height: 800,
            hide_title_bar: true,
            hide_cursor_when_idle: true,
            menu_open_on_start: true,
            pane_gap: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "TV Splitscreen");
        assert_eq!((config.width, config.height), (1280, 800));
        assert!(config.hide_title_bar);
        assert!(config.hide_cursor_when_idle);
        assert!(config.menu_open_on_start);
        assert_eq!(config.pane_gap, 0);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
menu_open_on_start = false
pane_gap = 4
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.menu_open_on_start);
        assert_eq!(config.pane_gap, 4);
        assert_eq!(config.width, 1280);
    }
}
