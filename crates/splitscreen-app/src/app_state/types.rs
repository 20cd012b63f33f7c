//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll for events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Webview id of the menu overlay. Pane webviews use their pane index.
pub(super) const OVERLAY_VIEW_ID: u32 = 100;

/// Overlay size while only the gear is shown (logical px).
pub(super) const GEAR_SIZE: (f64, f64) = (64.0, 64.0);

/// Distance between the overlay and the window's top-right corner.
pub(super) const OVERLAY_MARGIN: f64 = 12.0;

/// Grace period for the timer runtime on shutdown.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);
