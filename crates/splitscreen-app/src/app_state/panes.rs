//! The fixed set of pane controllers and the effects applied to them.

use splitscreen_common::PaneIndex;
use splitscreen_webview::{PageLoadState, PaneController, Renderer};

use super::menu::{PaneCommand, SplitState};
use super::mute::MuteCoordinator;

/// All panes, created eagerly and never destroyed.
pub(crate) struct PaneSet<R: Renderer> {
    panes: Vec<PaneController<R>>,
    default_url: String,
}

impl<R: Renderer> PaneSet<R> {
    pub fn new(default_url: impl Into<String>) -> Self {
        Self {
            panes: Vec::new(),
            default_url: default_url.into(),
        }
    }

    pub fn push(&mut self, pane: PaneController<R>) {
        self.panes.push(pane);
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaneController<R>> {
        self.panes.iter()
    }

    /// Recompute every pane's mute intent from `state`.
    pub fn sync_mute(&mut self, state: &SplitState) -> usize {
        MuteCoordinator::apply(&mut self.panes, state)
    }

    /// Execute drained one-shot commands in order.
    pub fn run_commands(&mut self, commands: impl IntoIterator<Item = PaneCommand>) {
        for command in commands {
            let index = match command {
                PaneCommand::Refresh(i) | PaneCommand::Reset(i) | PaneCommand::MoveVideo(i) => i,
            };
            let Some(pane) = self.panes.get_mut(index.0) else {
                tracing::warn!(pane = %index, ?command, "no such pane");
                continue;
            };
            match command {
                PaneCommand::Refresh(_) => pane.refresh(),
                PaneCommand::Reset(_) => pane.reset(&self.default_url),
                PaneCommand::MoveVideo(_) => pane.move_video(),
            }
        }
    }

    pub fn on_page_load(&mut self, index: PaneIndex, state: PageLoadState, url: &str) {
        if let Some(pane) = self.panes.get_mut(index.0) {
            pane.on_page_load(state, url);
        }
    }

    /// Drop every controller (and its renderer).
    pub fn clear(&mut self) {
        self.panes.clear();
    }
}
