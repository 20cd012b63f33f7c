//! Pane configuration: start URL, startup pane state, page tweaks.

use serde::{Deserialize, Serialize};

/// Pane settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanesConfig {
    /// URL every pane loads at startup and returns to on reset.
    pub default_url: String,
    /// Panes shown at startup (valid range: 1-4).
    pub initial_count: u32,
    /// One-based pane that has sound at startup; 0 mutes all.
    pub initial_unmuted: u32,
    /// CSS selectors hidden by the injected page script (site nav bars etc.).
    pub hidden_selectors: Vec<String>,
    /// Custom user agent for pane webviews.
    pub user_agent: Option<String>,
    /// Have pages report touch / scroll / pointer activity back to the app.
    pub report_interactions: bool,
}

impl Default for PanesConfig {
    fn default() -> Self {
        Self {
            default_url: "https://the.streameast.app".to_string(),
            initial_count: 1,
            initial_unmuted: 1,
            hidden_selectors: vec![".site-nav".to_string()],
            user_agent: None,
            report_interactions: true,
        }
    }
}
