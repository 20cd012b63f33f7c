//! Coordinate conversion and pane placement.

use splitscreen_common::{PaneIndex, Rect};

use super::core::SplitscreenApp;

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub fn layout_rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

impl SplitscreenApp {
    /// Current window content area in logical pixels.
    pub(super) fn viewport(&self) -> Rect {
        match &self.window {
            Some(w) => {
                let size = w.inner_size().to_logical::<f64>(w.scale_factor());
                Rect::from_size(size.width, size.height)
            }
            None => Rect::from_size(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ),
        }
    }

    /// Placement of the active panes for the current viewport.
    pub(super) fn pane_rects(&self) -> Vec<(PaneIndex, Rect)> {
        self.layout
            .compute(self.menu.state().pane_count, self.viewport())
    }

    /// Move every pane webview to its slot; hide the inactive ones.
    pub(super) fn sync_layout(&mut self) {
        let placed = self.pane_rects();
        for pane in self.panes.iter() {
            let handle = pane.renderer();
            match placed.iter().find(|(i, _)| *i == pane.index()) {
                Some((_, rect)) => {
                    if let Err(e) = handle.set_bounds(layout_rect_to_wry(rect)) {
                        tracing::warn!(pane = %pane.index(), error = %e, "set_bounds failed");
                    }
                    if let Err(e) = handle.set_visible(true) {
                        tracing::warn!(pane = %pane.index(), error = %e, "show failed");
                    }
                }
                None => {
                    if let Err(e) = handle.set_visible(false) {
                        tracing::warn!(pane = %pane.index(), error = %e, "hide failed");
                    }
                }
            }
        }
        tracing::debug!(panes = placed.len(), "layout synced");
        self.sync_chrome();
    }
}
