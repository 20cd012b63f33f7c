//! MuteCoordinator: maps the single unmuted slot onto per-pane intents.

use splitscreen_common::PaneIndex;
use splitscreen_webview::{PaneController, Renderer};

use super::menu::SplitState;

pub(crate) struct MuteCoordinator;

impl MuteCoordinator {
    /// Desired mute intent of pane `index` (zero-based) given `pane_count`
    /// active panes and one-based `unmuted` slot. Hidden panes are always
    /// muted; an out-of-range slot mutes everything.
    pub fn desired_mute(index: usize, pane_count: usize, unmuted: usize) -> bool {
        index >= pane_count || PaneIndex::from_sound_slot(unmuted) != Some(PaneIndex(index))
    }

    /// Push the intent to every pane. Returns how many panes changed.
    pub fn apply<R: Renderer>(panes: &mut [PaneController<R>], state: &SplitState) -> usize {
        let mut changed = 0;
        for (i, pane) in panes.iter_mut().enumerate() {
            let muted = Self::desired_mute(i, state.pane_count, state.unmuted);
            if pane.set_mute(muted) {
                changed += 1;
            }
        }
        tracing::debug!(
            pane_count = state.pane_count,
            unmuted = state.unmuted,
            changed,
            "mute assignment applied"
        );
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::test_support::recording_panes;
    use splitscreen_common::MAX_PANES;

    fn state(pane_count: usize, unmuted: usize) -> SplitState {
        SplitState::new(pane_count, unmuted, false)
    }

    #[test]
    fn at_most_one_pane_unmuted_for_every_assignment() {
        for n in 1..=MAX_PANES {
            for u in 0..=n {
                let mut panes = recording_panes("https://example.com");
                MuteCoordinator::apply(&mut panes, &state(n, u));

                let unmuted: Vec<usize> = panes
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| !p.is_muted())
                    .map(|(i, _)| i)
                    .collect();
                if u == 0 {
                    assert!(unmuted.is_empty(), "n={n} u={u}: {unmuted:?}");
                } else {
                    assert_eq!(unmuted, vec![u - 1], "n={n} u={u}");
                }
            }
        }
    }

    #[test]
    fn switching_slot_touches_only_two_panes() {
        let mut panes = recording_panes("https://example.com");
        assert_eq!(MuteCoordinator::apply(&mut panes, &state(4, 1)), 1);
        assert_eq!(MuteCoordinator::apply(&mut panes, &state(4, 3)), 2);
        assert_eq!(panes[0].renderer().script_count(), 2);
        assert_eq!(panes[1].renderer().script_count(), 0);
        assert_eq!(panes[2].renderer().script_count(), 1);
    }

    #[test]
    fn recompute_without_change_issues_no_scripts() {
        let mut panes = recording_panes("https://example.com");
        MuteCoordinator::apply(&mut panes, &state(2, 2));
        assert_eq!(MuteCoordinator::apply(&mut panes, &state(2, 2)), 0);
        let total: usize = panes.iter().map(|p| p.renderer().script_count()).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn hidden_panes_are_always_muted() {
        assert!(MuteCoordinator::desired_mute(2, 2, 3));
        assert!(MuteCoordinator::desired_mute(3, 2, 4));
        assert!(!MuteCoordinator::desired_mute(1, 2, 2));
    }

    #[test]
    fn out_of_range_slot_mutes_everything() {
        for i in 0..MAX_PANES {
            assert!(MuteCoordinator::desired_mute(i, 2, 7));
        }
    }
}
