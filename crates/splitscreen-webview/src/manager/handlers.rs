use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// URL prefixes a pane may navigate to.
///
/// Stream sites hop across many origins, so any web origin is allowed.
/// App-launch schemes (`intent:`, `itms-apps:`, ...) and local files are not.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "https://",
    "http://",
    "about:",
    "blob:",
    "data:",
];

/// Check whether a URL passes the navigation policy.
pub fn is_navigation_allowed(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

fn push(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    view_id,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(view_id, body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { view_id, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(view_id, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { view_id, state, url });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if is_navigation_allowed(&url) {
                return true;
            }
            warn!(view_id, url = %url, "navigation blocked");
            push(&events, WebViewEvent::NavigationBlocked { view_id, url });
            false
        })
    }

    pub(super) fn attach_popup_blocker<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(view_id, url = %url, "popup blocked");
            push(&events, WebViewEvent::PopupBlocked { view_id, url });
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_web_origins() {
        assert!(is_navigation_allowed("https://the.streameast.app/nba"));
        assert!(is_navigation_allowed("http://insecure.example.com/"));
        assert!(is_navigation_allowed("HTTPS://UPPER.EXAMPLE"));
    }

    #[test]
    fn allows_embedded_document_schemes() {
        assert!(is_navigation_allowed("about:blank"));
        assert!(is_navigation_allowed("about:srcdoc"));
        assert!(is_navigation_allowed("blob:https://example.com/uuid"));
        assert!(is_navigation_allowed("data:text/html,<p>player</p>"));
    }

    #[test]
    fn blocks_app_launch_schemes() {
        assert!(!is_navigation_allowed("intent://scan/#Intent;scheme=zxing;end"));
        assert!(!is_navigation_allowed("itms-apps://apps.apple.com/app/id1"));
        assert!(!is_navigation_allowed("market://details?id=x"));
    }

    #[test]
    fn blocks_file_protocol() {
        assert!(!is_navigation_allowed("file:///etc/passwd"));
        assert!(!is_navigation_allowed("file://localhost/etc/hosts"));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        assert!(!is_navigation_allowed(""));
        assert!(!is_navigation_allowed("   "));
        assert!(!is_navigation_allowed("not-a-url"));
        assert!(!is_navigation_allowed("ftp://files.example.com"));
    }

    #[test]
    fn policy_has_expected_entries() {
        assert_eq!(ALLOWED_NAV_PREFIXES.len(), 5);
        assert!(ALLOWED_NAV_PREFIXES.contains(&"https://"));
        assert!(!ALLOWED_NAV_PREFIXES.contains(&"file://"));
    }
}
