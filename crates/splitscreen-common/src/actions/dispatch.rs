use super::Action;
use crate::types::{PaneIndex, MAX_PANES};

impl Action {
    /// Short button text for the overlay menu.
    pub fn label(&self) -> String {
        match self {
            Action::SetPaneCount(n) => n.to_string(),
            Action::SetUnmutedPane(0) => "None".to_string(),
            Action::SetUnmutedPane(n) => n.to_string(),
            Action::RefreshPane(i) | Action::ResetPane(i) | Action::MoveVideo(i) => {
                i.sound_slot().to_string()
            }
            Action::ToggleMenu => "Menu".to_string(),
            Action::Interaction(_) => "Interaction".to_string(),
            Action::Quit => "Quit".to_string(),
            Action::None => "None".to_string(),
        }
    }

    /// Overlay menu row this action belongs to, if it is shown there.
    pub fn menu_group(&self) -> Option<&'static str> {
        match self {
            Action::SetPaneCount(_) => Some("Num streams"),
            Action::SetUnmutedPane(_) => Some("Sound"),
            Action::MoveVideo(_) => Some("Move video"),
            Action::RefreshPane(_) => Some("Refresh"),
            Action::ResetPane(_) => Some("Reset"),
            _ => None,
        }
    }

    /// Whether dispatching this action should wake the chrome.
    pub fn counts_as_interaction(&self) -> bool {
        !matches!(self, Action::Quit | Action::None)
    }

    /// All actions the overlay menu offers while `pane_count` panes are shown,
    /// in row order.
    pub fn menu_actions(pane_count: usize) -> Vec<Action> {
        let count = pane_count.clamp(1, MAX_PANES);
        let mut actions: Vec<Action> = (1..=MAX_PANES).map(Action::SetPaneCount).collect();
        actions.extend((0..=count).map(Action::SetUnmutedPane));
        actions.extend((0..count).map(|i| Action::MoveVideo(PaneIndex(i))));
        actions.extend((0..count).map(|i| Action::RefreshPane(PaneIndex(i))));
        actions.extend((0..count).map(|i| Action::ResetPane(PaneIndex(i))));
        actions
    }
}
