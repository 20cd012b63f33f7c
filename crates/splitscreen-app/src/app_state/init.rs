//! Window creation, timer runtime, and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use splitscreen_common::{PaneIndex, PlatformError, Rect, SplitscreenError, MAX_PANES};
use splitscreen_platform::IdleTicker;
use splitscreen_webview::{
    MuteTimings, PageScriptOptions, PaneController, WebViewConfig, WebViewManager,
};

use super::bounds::layout_rect_to_wry;
use super::chrome::overlay_rect;
use super::core::SplitscreenApp;
use super::mute::MuteCoordinator;
use super::overlay::{overlay_html, overlay_size};
use super::types::OVERLAY_VIEW_ID;

impl SplitscreenApp {
    /// Create the window, the timer runtime and every webview.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        if let Err(e) = self.try_initialize(event_loop) {
            tracing::error!("Initialization failed: {e}");
            return false;
        }
        tracing::info!(
            panes = self.panes.len(),
            active = self.menu.state().pane_count,
            "Window and webviews initialized"
        );
        true
    }

    fn try_initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SplitscreenError> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        // macOS: hide the title bar, content extends to the top edge
        #[cfg(target_os = "macos")]
        let attrs = {
            use winit::platform::macos::WindowAttributesExtMacOS;
            if self.config.window.hide_title_bar {
                attrs
                    .with_titlebar_transparent(true)
                    .with_title_hidden(true)
                    .with_fullsize_content_view(true)
            } else {
                attrs
            }
        };

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| PlatformError::WindowError(e.to_string()))?;
        self.window = Some(Arc::clone(&window));

        self.start_idle_ticker()?;
        self.initialize_webviews(&window)?;
        self.sync_layout();
        Ok(())
    }

    /// Spin up the single-worker timer runtime and the idle ticker on it.
    fn start_idle_ticker(&mut self) -> Result<(), SplitscreenError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("splitscreen-timer")
            .enable_time()
            .build()?;
        self.ticker = Some(IdleTicker::spawn(
            runtime.handle(),
            self.config.timing.idle_tick(),
        ));
        self.tokio_runtime = Some(runtime);
        Ok(())
    }

    /// Create all `MAX_PANES` pane webviews plus the overlay.
    fn initialize_webviews(&mut self, window: &Window) -> Result<(), SplitscreenError> {
        let manager = WebViewManager::new();
        let state = self.menu.state();
        let timings = MuteTimings {
            settle: self.config.timing.mute_settle(),
            resume: self.config.timing.resume_delay(),
        };

        for i in 0..MAX_PANES {
            let page = PageScriptOptions {
                muted: MuteCoordinator::desired_mute(i, state.pane_count, state.unmuted),
                poll_interval_ms: self.config.timing.page_poll_ms,
                hidden_selectors: self.config.panes.hidden_selectors.clone(),
                report_interactions: self.config.panes.report_interactions,
                interaction_throttle_ms: self.config.timing.interaction_throttle_ms,
            };
            let pane = PaneController::create(
                PaneIndex(i),
                &self.config.panes.default_url,
                timings,
                &page,
                |url, script| {
                    let config = self.pane_webview_config(url, script);
                    let hidden = layout_rect_to_wry(&Rect::from_size(0.0, 0.0));
                    manager.create(i as u32, window, hidden, config)
                },
            )
            .map_err(|e| SplitscreenError::WebView(format!("pane {}: {e}", i + 1)))?;
            self.panes.push(pane);
        }

        let overlay_bounds = overlay_rect(self.viewport(), overlay_size(&state));
        let overlay = manager
            .create(
                OVERLAY_VIEW_ID,
                window,
                layout_rect_to_wry(&overlay_bounds),
                overlay_webview_config(),
            )
            .map_err(|e| SplitscreenError::WebView(format!("overlay: {e}")))?;
        self.overlay = Some(overlay);

        self.webviews = Some(manager);
        Ok(())
    }

    /// Pane webviews run the page script in embedded frames as well, so
    /// players hosted in an iframe still get the mute flag and inline playback.
    fn pane_webview_config(&self, url: &str, script: &str) -> WebViewConfig {
        WebViewConfig {
            user_agent: self.config.panes.user_agent.clone(),
            subframes: true,
            ..WebViewConfig::with_url(url)
        }
        .init_script(script)
    }
}

fn overlay_webview_config() -> WebViewConfig {
    WebViewConfig {
        transparent: true,
        autoplay: false,
        ..WebViewConfig::with_html(overlay_html())
    }
}
