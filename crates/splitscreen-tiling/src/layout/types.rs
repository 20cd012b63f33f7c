//! Layout engine types and configuration.

use serde::{Deserialize, Serialize};
use splitscreen_common::types::PaneIndex;

/// How the visible panes are tiled on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arrangement {
    /// One column, panes stacked top to bottom.
    Column(Vec<PaneIndex>),
    /// Two rows: the top row holds panes `[0, 2)`, the bottom row the rest.
    Rows(Vec<PaneIndex>, Vec<PaneIndex>),
}

impl Arrangement {
    /// Visible panes in layout order.
    pub fn panes(&self) -> Vec<PaneIndex> {
        match self {
            Arrangement::Column(panes) => panes.clone(),
            Arrangement::Rows(top, bottom) => top.iter().chain(bottom).copied().collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            Arrangement::Column(_) => 1,
            Arrangement::Rows(..) => 2,
        }
    }
}

/// Turns an [`Arrangement`] into pixel rects.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    /// Gap in pixels between panes.
    pub gap: u32,
}
