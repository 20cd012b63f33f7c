//! Menu overlay: a transparent webview holding the gear and the menu.
//!
//! The page renders whatever [`MenuView`] the host last pushed and posts
//! the chosen [`splitscreen_common::Action`] back over IPC.

mod html;
mod metrics;
mod view;

pub(super) use html::overlay_html;
use view::MenuView;

use splitscreen_webview::ipc::KIND_MENU_STATE;

use super::core::SplitscreenApp;
use super::menu::SplitState;
use super::types::GEAR_SIZE;

/// Logical size of the overlay webview: the gear alone, or the gear plus
/// the menu panel sized to its rows.
pub(super) fn overlay_size(state: &SplitState) -> (f64, f64) {
    if state.menu_open {
        metrics::menu_size(&MenuView::from_state(state).rows)
    } else {
        GEAR_SIZE
    }
}

impl SplitscreenApp {
    /// Push the current menu state to the overlay page.
    pub(super) fn push_overlay_state(&self) {
        let Some(overlay) = &self.overlay else {
            return;
        };
        let view = MenuView::from_state(&self.menu.state());
        let payload = match serde_json::to_value(&view) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "menu state serialization failed");
                return;
            }
        };
        if let Err(e) = overlay.send_ipc(KIND_MENU_STATE, &payload) {
            tracing::warn!(error = %e, "failed to push menu state");
        }
    }
}
