//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance.
///
/// `view_id` identifies the webview: pane webviews use their pane index,
/// the overlay uses its own id.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        view_id: u32,
        state: PageLoadState,
        url: String,
    },
    /// An IPC message was received from JavaScript.
    IpcMessage { view_id: u32, body: String },
    /// A navigation to a non-web scheme was refused.
    NavigationBlocked { view_id: u32, url: String },
    /// A popup / new-window request was refused.
    PopupBlocked { view_id: u32, url: String },
}
