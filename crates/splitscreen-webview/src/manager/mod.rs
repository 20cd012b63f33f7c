//! `wry` adapter.
//!
//! `WebViewManager` builds child `wry::WebView`s inside the main window and
//! collects their callbacks into one event queue for the app loop to drain.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Builds webviews and owns the shared event sink.
pub struct WebViewManager {
    /// Event sink: callbacks push here, the main loop drains.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
