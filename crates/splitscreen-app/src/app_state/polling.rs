//! Polling of webview callbacks and idle ticks.

use std::time::Instant;

use winit::event_loop::ActiveEventLoop;

use splitscreen_common::PaneIndex;
use splitscreen_webview::{PageLoadState, WebViewEvent};

use super::core::SplitscreenApp;
use super::types::{OVERLAY_VIEW_ID, POLL_INTERVAL};

impl SplitscreenApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_idle_ticks();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }

    fn poll_idle_ticks(&mut self) {
        let Some(at) = self.ticker.as_ref().and_then(|t| t.poll()) else {
            return;
        };
        if let Some(transition) = self.menu.tick(at) {
            self.on_chrome_transition(transition);
        }
    }

    fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };
        for event in events {
            self.handle_webview_event(event);
        }
    }

    fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::PageLoad {
                view_id: OVERLAY_VIEW_ID,
                state: PageLoadState::Finished,
                ..
            } => {
                self.push_overlay_state();
            }
            WebViewEvent::PageLoad { view_id, state, url } => {
                if view_id != OVERLAY_VIEW_ID {
                    self.panes
                        .on_page_load(PaneIndex(view_id as usize), state, &url);
                }
            }
            WebViewEvent::IpcMessage { view_id, body } => {
                self.handle_ipc_message(view_id, &body);
            }
            WebViewEvent::NavigationBlocked { view_id, url } => {
                tracing::debug!(view_id, url = %url, "navigation refused");
            }
            WebViewEvent::PopupBlocked { view_id, url } => {
                tracing::debug!(view_id, url = %url, "popup refused");
            }
        }
    }
}
