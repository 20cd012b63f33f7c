//! Graceful shutdown: stop the ticker, drop webviews, stop the runtime.

use super::core::SplitscreenApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

impl SplitscreenApp {
    /// Perform graceful shutdown of all subsystems. Safe to call twice.
    ///
    /// Order matters:
    /// 1. Stop the idle ticker (abort its recurring task)
    /// 2. Drop pane webviews and the overlay
    /// 3. Shut down the tokio runtime
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }

        self.panes.clear();
        self.overlay = None;
        self.webviews = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        if self.cursor_hidden {
            if let Some(w) = &self.window {
                w.set_cursor_visible(true);
            }
            self.cursor_hidden = false;
        }

        tracing::info!("Graceful shutdown complete");
    }
}
