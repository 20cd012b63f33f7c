use serde::{Deserialize, Serialize};

mod action_enum;
mod dispatch;

pub use action_enum::*;

/// Source of a raw user interaction that keeps the chrome awake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Touch,
    Scroll,
    PointerMove,
    Click,
    Key,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaneIndex;

    #[test]
    fn all_menu_actions_have_labels() {
        for action in Action::menu_actions(4) {
            let label = action.label();
            assert!(!label.is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn menu_actions_scale_with_pane_count() {
        let one = Action::menu_actions(1);
        let four = Action::menu_actions(4);
        assert!(four.len() > one.len());
        assert!(four.contains(&Action::ResetPane(PaneIndex(3))));
        assert!(!one.contains(&Action::ResetPane(PaneIndex(1))));
    }

    #[test]
    fn menu_actions_clamp_pane_count() {
        assert_eq!(Action::menu_actions(9), Action::menu_actions(4));
        assert_eq!(Action::menu_actions(0), Action::menu_actions(1));
    }

    #[test]
    fn labels_are_one_based() {
        assert_eq!(Action::SetUnmutedPane(0).label(), "None");
        assert_eq!(Action::SetUnmutedPane(2).label(), "2");
        assert_eq!(Action::RefreshPane(PaneIndex(0)).label(), "1");
        assert_eq!(Action::SetPaneCount(4).label(), "4");
    }

    #[test]
    fn every_menu_action_has_a_group() {
        for action in Action::menu_actions(4) {
            assert!(action.menu_group().is_some(), "{action:?} has no menu row");
        }
        assert_eq!(Action::ToggleMenu.menu_group(), None);
    }

    #[test]
    fn overlay_json_parses() {
        let action: Action = serde_json::from_str(r#"{"SetPaneCount":3}"#).unwrap();
        assert_eq!(action, Action::SetPaneCount(3));

        let action: Action = serde_json::from_str(r#"{"RefreshPane":1}"#).unwrap();
        assert_eq!(action, Action::RefreshPane(PaneIndex(1)));

        let action: Action = serde_json::from_str(r#""ToggleMenu""#).unwrap();
        assert_eq!(action, Action::ToggleMenu);

        let action: Action = serde_json::from_str(r#"{"Interaction":"pointer_move"}"#).unwrap();
        assert_eq!(action, Action::Interaction(InteractionKind::PointerMove));
    }

    #[test]
    fn counts_as_interaction() {
        assert!(Action::ToggleMenu.counts_as_interaction());
        assert!(Action::SetPaneCount(2).counts_as_interaction());
        assert!(!Action::Quit.counts_as_interaction());
        assert!(!Action::None.counts_as_interaction());
    }
}
