use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);
        let main_only = !config.subframes;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_autoplay(config.autoplay)
            .with_focused(false)
            .with_initialization_script_for_main_only(IPC_INIT_SCRIPT, main_only);

        if !config.transparent {
            builder = builder.with_background_color((0, 0, 0, 255));
        }

        for script in &config.init_scripts {
            builder = builder.with_initialization_script_for_main_only(script, main_only);
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), view_id);
        if config.block_popups {
            builder = Self::attach_popup_blocker(builder, Arc::clone(&events), view_id);
        }

        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        let webview = builder.build_as_child(window)?;

        debug!(view_id, url = %initial_url, "WebView created");

        Ok(WebViewHandle { webview })
    }
}
