//! SplitscreenApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use splitscreen_config::SplitscreenConfig;
use splitscreen_platform::IdleTicker;
use splitscreen_tiling::LayoutEngine;
use splitscreen_webview::{WebViewHandle, WebViewManager};

use super::menu::{MenuController, SplitState};
use super::panes::PaneSet;

/// Top-level application state.
pub struct SplitscreenApp {
    pub(super) config: SplitscreenConfig,
    pub(super) menu: MenuController,
    pub(super) layout: LayoutEngine,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // WebViews
    pub(super) webviews: Option<WebViewManager>,
    pub(super) panes: PaneSet<WebViewHandle>,
    pub(super) overlay: Option<WebViewHandle>,

    // Idle timer
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) ticker: Option<IdleTicker>,
    pub(super) cursor_hidden: bool,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl SplitscreenApp {
    pub fn new(config: SplitscreenConfig) -> Self {
        let now = Instant::now();
        let menu = MenuController::new(
            SplitState::from_config(&config),
            config.timing.idle_threshold(),
            now,
        );
        Self {
            layout: LayoutEngine::new(config.window.pane_gap),
            panes: PaneSet::new(config.panes.default_url.clone()),
            menu,
            config,
            window: None,
            webviews: None,
            overlay: None,
            tokio_runtime: None,
            ticker: None,
            cursor_hidden: false,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            last_poll: now,
        }
    }
}
