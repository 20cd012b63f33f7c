use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of panes created at startup. Panes are reused, never destroyed.
pub const MAX_PANES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// A rect anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

/// Zero-based pane position in `[0, MAX_PANES)`.
///
/// The sound selector uses one-based slots where `0` means "all muted",
/// so conversions to and from that numbering live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PaneIndex(pub usize);

impl PaneIndex {
    /// The sound selector value that unmutes this pane.
    pub fn sound_slot(self) -> usize {
        self.0 + 1
    }

    /// Inverse of [`PaneIndex::sound_slot`]; slot `0` names no pane.
    pub fn from_sound_slot(slot: usize) -> Option<Self> {
        slot.checked_sub(1).map(PaneIndex)
    }
}

impl fmt::Display for PaneIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane-{}", self.0 + 1)
    }
}
