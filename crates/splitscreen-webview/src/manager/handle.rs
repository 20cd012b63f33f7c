use wry::WebView;

use crate::renderer::{Renderer, RendererError};

/// wry has no native reload; the page reloads itself.
const RELOAD_SCRIPT: &str = "window.location.reload();";

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    pub(super) webview: WebView,
}

impl WebViewHandle {
    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }
}

impl Renderer for WebViewHandle {
    fn navigate(&mut self, url: &str) -> Result<(), RendererError> {
        self.webview.load_url(url).map_err(RendererError::from)
    }

    fn execute_script(&self, js: &str) -> Result<(), RendererError> {
        self.webview.evaluate_script(js).map_err(RendererError::from)
    }

    fn reload(&self) -> Result<(), RendererError> {
        self.webview
            .evaluate_script(RELOAD_SCRIPT)
            .map_err(RendererError::from)
    }
}
