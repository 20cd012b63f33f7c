//! MenuController: the single writer of shared split state.
//!
//! Every user command resolves to an [`Action`]; [`MenuController::dispatch`]
//! mutates [`SplitState`], queues one-shot pane commands and reports which
//! derived views (layout, mute assignment, chrome) need recomputing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use splitscreen_common::{Action, InteractionKind, PaneIndex, MAX_PANES};
use splitscreen_config::SplitscreenConfig;
use splitscreen_platform::{ChromeTransition, InteractionTracker};

/// Shared state read by layout, mute and overlay code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SplitState {
    /// Active pane count, always in `[1, MAX_PANES]`.
    pub pane_count: usize,
    /// One-based unmuted pane; `0` means every pane is muted.
    pub unmuted: usize,
    pub menu_open: bool,
}

impl SplitState {
    /// Clamp raw values into a consistent state.
    pub fn new(pane_count: usize, unmuted: usize, menu_open: bool) -> Self {
        let pane_count = pane_count.clamp(1, MAX_PANES);
        let unmuted = if unmuted > pane_count { 0 } else { unmuted };
        Self {
            pane_count,
            unmuted,
            menu_open,
        }
    }

    pub fn from_config(config: &SplitscreenConfig) -> Self {
        Self::new(
            config.panes.initial_count as usize,
            config.panes.initial_unmuted as usize,
            config.window.menu_open_on_start,
        )
    }
}

/// One-shot renderer command. Consumed exactly once by
/// [`MenuController::take_commands`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaneCommand {
    Refresh(PaneIndex),
    Reset(PaneIndex),
    MoveVideo(PaneIndex),
}

/// What changed as a result of a dispatch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuUpdate {
    pub layout_changed: bool,
    pub mute_changed: bool,
    pub menu_changed: bool,
    pub chrome: Option<ChromeTransition>,
    pub quit: bool,
}

impl MenuUpdate {
    /// Whether the overlay needs a fresh state push.
    pub fn state_changed(&self) -> bool {
        self.layout_changed || self.mute_changed || self.menu_changed
    }
}

pub(crate) struct MenuController {
    state: SplitState,
    tracker: InteractionTracker,
    pending: VecDeque<PaneCommand>,
}

impl MenuController {
    pub fn new(state: SplitState, idle_threshold: Duration, now: Instant) -> Self {
        Self {
            state: SplitState::new(state.pane_count, state.unmuted, state.menu_open),
            tracker: InteractionTracker::new(idle_threshold, now),
            pending: VecDeque::new(),
        }
    }

    pub fn state(&self) -> SplitState {
        self.state
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) -> MenuUpdate {
        let mut update = MenuUpdate::default();

        if action.counts_as_interaction() {
            let kind = match action {
                Action::Interaction(kind) => kind,
                _ => InteractionKind::Click,
            };
            update.chrome = self.tracker.record(kind, now);
        }

        match action {
            Action::SetPaneCount(n) => self.set_pane_count(n, &mut update),
            Action::SetUnmutedPane(slot) => self.set_unmuted(slot, &mut update),
            Action::RefreshPane(index) => self.queue_for_active(PaneCommand::Refresh(index), index),
            Action::ResetPane(index) => self.queue_for_active(PaneCommand::Reset(index), index),
            Action::MoveVideo(index) => self.queue_for_active(PaneCommand::MoveVideo(index), index),
            Action::ToggleMenu => {
                self.state.menu_open = !self.state.menu_open;
                update.menu_changed = true;
                tracing::debug!(menu_open = self.state.menu_open, "menu toggled");
            }
            Action::Interaction(_) | Action::None => {}
            Action::Quit => update.quit = true,
        }

        update
    }

    fn set_pane_count(&mut self, requested: usize, update: &mut MenuUpdate) {
        let count = requested.clamp(1, MAX_PANES);
        let old = self.state.pane_count;
        if count == old {
            return;
        }

        // Hidden panes go back to the start page.
        for i in count..old {
            self.pending.push_back(PaneCommand::Reset(PaneIndex(i)));
        }
        self.state.pane_count = count;
        if self.state.unmuted > count {
            tracing::info!(unmuted = self.state.unmuted, count, "unmuted pane hidden, muting all");
            self.state.unmuted = 0;
        }

        tracing::info!(from = old, to = count, "pane count changed");
        update.layout_changed = true;
        update.mute_changed = true;
    }

    fn set_unmuted(&mut self, slot: usize, update: &mut MenuUpdate) {
        let slot = if slot > self.state.pane_count {
            tracing::warn!(slot, pane_count = self.state.pane_count, "sound slot out of range");
            0
        } else {
            slot
        };
        if slot != self.state.unmuted {
            self.state.unmuted = slot;
            update.mute_changed = true;
        }
    }

    fn queue_for_active(&mut self, command: PaneCommand, index: PaneIndex) {
        if index.0 >= self.state.pane_count {
            tracing::warn!(pane = %index, pane_count = self.state.pane_count, ?command, "command for hidden pane ignored");
            return;
        }
        self.pending.push_back(command);
    }

    /// Drain queued one-shot commands. A command is returned once only.
    pub fn take_commands(&mut self) -> Vec<PaneCommand> {
        self.pending.drain(..).collect()
    }

    /// Age the idle timer.
    pub fn tick(&mut self, now: Instant) -> Option<ChromeTransition> {
        self.tracker.tick(now)
    }

    /// Gear/menu visibility: pinned open or recently active.
    pub fn chrome_visible(&self) -> bool {
        self.state.menu_open || self.tracker.chrome_visible()
    }

    /// Whether the user has been active recently, ignoring the pinned menu.
    pub fn user_active(&self) -> bool {
        self.tracker.chrome_visible()
    }
}
