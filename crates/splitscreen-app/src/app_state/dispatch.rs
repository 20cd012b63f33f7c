//! Action dispatch: routes resolved actions through the menu store and
//! applies the resulting effects.

use std::time::Instant;

use splitscreen_common::Action;

use super::core::SplitscreenApp;
use super::menu::MenuUpdate;

impl SplitscreenApp {
    /// Dispatch a resolved [`Action`].
    pub(super) fn dispatch(&mut self, action: Action) {
        let update = self.menu.dispatch(action, Instant::now());
        self.apply_update(update);
    }

    /// Recompute derived views, then run queued one-shot commands.
    fn apply_update(&mut self, update: MenuUpdate) {
        if update.quit {
            tracing::info!("Quit requested");
            self.should_exit = true;
            return;
        }

        let state = self.menu.state();
        if update.layout_changed {
            self.sync_layout();
        }
        if update.mute_changed {
            self.panes.sync_mute(&state);
        }
        self.panes.run_commands(self.menu.take_commands());

        if update.chrome.is_some() || update.menu_changed {
            self.sync_chrome();
        }
        if update.state_changed() {
            self.push_overlay_state();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitscreen_common::PaneIndex;

    #[test]
    fn quit_sets_exit_flag() {
        let mut app = SplitscreenApp::new(Default::default());
        app.dispatch(Action::Quit);
        assert!(app.should_exit);
    }

    #[test]
    fn commands_are_drained_even_without_webviews() {
        let mut app = SplitscreenApp::new(Default::default());
        app.dispatch(Action::SetPaneCount(4));
        app.dispatch(Action::RefreshPane(PaneIndex(3)));
        app.dispatch(Action::SetPaneCount(1));
        assert!(app.menu.take_commands().is_empty());
        assert_eq!(app.menu.state().pane_count, 1);
    }

    #[test]
    fn toggle_menu_round_trips() {
        let mut app = SplitscreenApp::new(Default::default());
        assert!(app.menu.state().menu_open);
        app.dispatch(Action::ToggleMenu);
        assert!(!app.menu.state().menu_open);
        app.dispatch(Action::ToggleMenu);
        assert!(app.menu.state().menu_open);
    }
}
