use splitscreen_common::PaneIndex;

use crate::events::PageLoadState;
use crate::renderer::Renderer;
use crate::scripts::{
    apply_intent_script, move_video_script, page_script, MuteSequence, MuteTimings,
    PageScriptOptions,
};

/// Owns one pane's renderer and its mute intent.
///
/// Renderer failures are logged and swallowed: a pane that fails to accept
/// a script keeps its intent and the next sequence or page load re-applies
/// it.
pub struct PaneController<R: Renderer> {
    index: PaneIndex,
    renderer: R,
    url: String,
    muted: bool,
    timings: MuteTimings,
}

impl<R: Renderer> PaneController<R> {
    /// Wrap an already-loaded renderer.
    pub fn new(
        index: PaneIndex,
        renderer: R,
        url: impl Into<String>,
        muted: bool,
        timings: MuteTimings,
    ) -> Self {
        Self {
            index,
            renderer,
            url: url.into(),
            muted,
            timings,
        }
    }

    /// Build the page script for `page`, hand it to `build` together with
    /// `url`, and wrap the resulting renderer.
    pub fn create<E>(
        index: PaneIndex,
        url: &str,
        timings: MuteTimings,
        page: &PageScriptOptions,
        build: impl FnOnce(&str, &str) -> Result<R, E>,
    ) -> Result<Self, E> {
        let script = page_script(page);
        let renderer = build(url, &script)?;
        tracing::debug!(pane = %index, url, muted = page.muted, "pane created");
        Ok(Self::new(index, renderer, url, page.muted, timings))
    }

    /// Set the mute intent. Returns `true` if it changed and a settle
    /// sequence was issued.
    pub fn set_mute(&mut self, muted: bool) -> bool {
        if self.muted == muted {
            return false;
        }
        self.muted = muted;
        let script = MuteSequence::new(muted, &self.timings).to_script();
        if let Err(e) = self.renderer.execute_script(&script) {
            tracing::warn!(pane = %self.index, error = %e, "mute sequence failed");
        }
        tracing::info!(pane = %self.index, muted, "mute intent changed");
        true
    }

    /// Reload the current document.
    pub fn refresh(&mut self) {
        tracing::info!(pane = %self.index, "refreshing pane");
        if let Err(e) = self.renderer.reload() {
            tracing::warn!(pane = %self.index, error = %e, "reload failed");
        }
    }

    /// Navigate to `url`, making it the pane's current URL.
    pub fn reset(&mut self, url: &str) {
        tracing::info!(pane = %self.index, url, "resetting pane");
        self.url = url.to_string();
        if let Err(e) = self.renderer.navigate(url) {
            tracing::warn!(pane = %self.index, url, error = %e, "navigation failed");
        }
    }

    pub fn move_video(&mut self) {
        tracing::debug!(pane = %self.index, "moving video");
        if let Err(e) = self.renderer.execute_script(&move_video_script()) {
            tracing::warn!(pane = %self.index, error = %e, "move video failed");
        }
    }

    /// React to a page-load notification for this pane. A finished load
    /// re-asserts the current intent on the fresh document.
    pub fn on_page_load(&mut self, state: PageLoadState, url: &str) {
        match state {
            PageLoadState::Started => {
                tracing::debug!(pane = %self.index, url, "page load started");
            }
            PageLoadState::Finished => {
                tracing::debug!(pane = %self.index, url, muted = self.muted, "page loaded");
                if let Err(e) = self
                    .renderer
                    .execute_script(&apply_intent_script(self.muted))
                {
                    tracing::warn!(pane = %self.index, error = %e, "re-applying mute failed");
                }
            }
        }
    }

    pub fn index(&self) -> PaneIndex {
        self.index
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
