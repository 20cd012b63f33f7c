use serde::Serialize;

use splitscreen_common::Action;

use crate::app_state::menu::SplitState;

/// One button in a menu row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MenuButton {
    pub label: String,
    pub action: Action,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MenuRow {
    pub title: &'static str,
    pub buttons: Vec<MenuButton>,
}

/// Everything the overlay page needs to render itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MenuView {
    pub pane_count: usize,
    pub unmuted: usize,
    pub menu_open: bool,
    pub rows: Vec<MenuRow>,
}

impl MenuView {
    pub fn from_state(state: &SplitState) -> Self {
        let mut rows: Vec<MenuRow> = Vec::new();
        for action in Action::menu_actions(state.pane_count) {
            let Some(title) = action.menu_group() else {
                continue;
            };
            let selected = match action {
                Action::SetPaneCount(n) => n == state.pane_count,
                Action::SetUnmutedPane(slot) => slot == state.unmuted,
                _ => false,
            };
            let button = MenuButton {
                label: action.label(),
                action,
                selected,
            };
            match rows.last_mut() {
                Some(row) if row.title == title => row.buttons.push(button),
                _ => rows.push(MenuRow {
                    title,
                    buttons: vec![button],
                }),
            }
        }
        Self {
            pane_count: state.pane_count,
            unmuted: state.unmuted,
            menu_open: state.menu_open,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitscreen_common::PaneIndex;

    fn titles(view: &MenuView) -> Vec<&'static str> {
        view.rows.iter().map(|r| r.title).collect()
    }

    #[test]
    fn rows_follow_menu_order() {
        let view = MenuView::from_state(&SplitState::new(2, 1, true));
        assert_eq!(
            titles(&view),
            vec!["Num streams", "Sound", "Move video", "Refresh", "Reset"]
        );
    }

    #[test]
    fn per_pane_rows_scale_with_count() {
        let view = MenuView::from_state(&SplitState::new(3, 0, true));
        assert_eq!(view.rows[0].buttons.len(), 4);
        assert_eq!(view.rows[1].buttons.len(), 4);
        assert_eq!(view.rows[3].buttons.len(), 3);
        assert_eq!(
            view.rows[4].buttons[2].action,
            Action::ResetPane(PaneIndex(2))
        );
    }

    #[test]
    fn current_choices_are_selected() {
        let view = MenuView::from_state(&SplitState::new(2, 0, true));
        let selected: Vec<&str> = view
            .rows
            .iter()
            .flat_map(|r| r.buttons.iter())
            .filter(|b| b.selected)
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(selected, vec!["2", "None"]);
    }

    #[test]
    fn serializes_actions_in_ipc_shape() {
        let view = MenuView::from_state(&SplitState::new(1, 1, false));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["menu_open"], false);
        assert_eq!(json["rows"][0]["buttons"][0]["action"]["SetPaneCount"], 1);
        assert_eq!(json["rows"][2]["buttons"][0]["action"]["MoveVideo"], 0);
    }
}
