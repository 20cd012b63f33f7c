//! Chrome visibility: overlay placement and the idle cursor.

use splitscreen_common::Rect;
use splitscreen_platform::ChromeTransition;

use super::bounds::layout_rect_to_wry;
use super::core::SplitscreenApp;
use super::overlay::overlay_size;
use super::types::OVERLAY_MARGIN;

/// Overlay rect of `size` anchored to the viewport's top-right corner,
/// clamped to fit.
pub(super) fn overlay_rect(viewport: Rect, size: (f64, f64)) -> Rect {
    let (w, h) = size;
    let width = w.min((viewport.width - 2.0 * OVERLAY_MARGIN).max(0.0));
    let height = h.min((viewport.height - 2.0 * OVERLAY_MARGIN).max(0.0));
    Rect {
        x: (viewport.x + viewport.width - width - OVERLAY_MARGIN).max(viewport.x),
        y: viewport.y + OVERLAY_MARGIN,
        width,
        height,
    }
}

impl SplitscreenApp {
    pub(super) fn on_chrome_transition(&mut self, transition: ChromeTransition) {
        tracing::debug!(?transition, "chrome transition");
        self.sync_chrome();
    }

    /// Apply chrome visibility to the overlay webview and the cursor.
    pub(super) fn sync_chrome(&mut self) {
        let state = self.menu.state();
        let visible = self.menu.chrome_visible();

        if let Some(overlay) = &self.overlay {
            let rect = overlay_rect(self.viewport(), overlay_size(&state));
            if let Err(e) = overlay.set_bounds(layout_rect_to_wry(&rect)) {
                tracing::warn!(error = %e, "overlay set_bounds failed");
            }
            if let Err(e) = overlay.set_visible(visible) {
                tracing::warn!(error = %e, "overlay visibility failed");
            }
        }

        let hide_cursor = self.config.window.hide_cursor_when_idle && !self.menu.user_active();
        if hide_cursor != self.cursor_hidden {
            if let Some(w) = &self.window {
                w.set_cursor_visible(!hide_cursor);
            }
            self.cursor_hidden = hide_cursor;
        }
    }
}
