use serde::{Deserialize, Serialize};

use super::InteractionKind;
use crate::types::PaneIndex;

/// Every user-triggerable action in the application.
///
/// The overlay menu, native window input, and in-page interaction reports
/// all resolve to an `Action`. The store matches on this enum to mutate state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Panes --
    /// Show this many panes (clamped to `[1, MAX_PANES]`).
    SetPaneCount(usize),
    /// One-based sound slot; `0` mutes every pane.
    SetUnmutedPane(usize),
    RefreshPane(PaneIndex),
    ResetPane(PaneIndex),
    MoveVideo(PaneIndex),

    // -- Chrome --
    ToggleMenu,
    Interaction(InteractionKind),

    // -- Window --
    Quit,

    // -- Noop --
    None,
}
