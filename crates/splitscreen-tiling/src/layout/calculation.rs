//! Layout calculation: pane count + viewport to arrangement to rects.

use splitscreen_common::types::{PaneIndex, Rect, MAX_PANES};

use super::{Arrangement, LayoutEngine};

/// Pick the tiling for `pane_count` panes in a `width` x `height` viewport.
///
/// Landscape viewports with more than two panes get two rows; everything
/// else is a single stacked column.
pub fn layout(pane_count: usize, width: f64, height: f64) -> Arrangement {
    let count = pane_count.clamp(1, MAX_PANES);
    let panes: Vec<PaneIndex> = (0..count).map(PaneIndex).collect();

    if Rect::from_size(width, height).is_landscape() && count > 2 {
        let (top, bottom) = panes.split_at(2);
        Arrangement::Rows(top.to_vec(), bottom.to_vec())
    } else {
        Arrangement::Column(panes)
    }
}

impl LayoutEngine {
    pub fn new(gap: u32) -> Self {
        Self { gap }
    }

    /// Rects for every visible pane, in pane order.
    pub fn compute(&self, pane_count: usize, bounds: Rect) -> Vec<(PaneIndex, Rect)> {
        let arrangement = layout(pane_count, bounds.width, bounds.height);
        self.compute_arrangement(&arrangement, bounds)
    }

    pub fn compute_arrangement(
        &self,
        arrangement: &Arrangement,
        bounds: Rect,
    ) -> Vec<(PaneIndex, Rect)> {
        let mut out = Vec::new();
        match arrangement {
            Arrangement::Column(panes) => {
                for (pane, rect) in panes.iter().zip(self.split_vertical(bounds, panes.len())) {
                    out.push((*pane, rect));
                }
            }
            Arrangement::Rows(top, bottom) => {
                let rows = self.split_vertical(bounds, 2);
                for (row, row_rect) in [top, bottom].into_iter().zip(rows) {
                    for (pane, rect) in row.iter().zip(self.split_horizontal(row_rect, row.len())) {
                        out.push((*pane, rect));
                    }
                }
            }
        }
        out
    }

    /// Equal-height slices stacked top to bottom.
    fn split_vertical(&self, bounds: Rect, n: usize) -> Vec<Rect> {
        if n == 0 {
            return Vec::new();
        }
        let gap = self.gap as f64;
        let available = (bounds.height - gap * (n - 1) as f64).max(0.0);
        let h = available / n as f64;
        (0..n)
            .map(|i| Rect {
                x: bounds.x,
                y: bounds.y + i as f64 * (h + gap),
                width: bounds.width,
                height: h,
            })
            .collect()
    }

    /// Equal-width slices left to right.
    fn split_horizontal(&self, bounds: Rect, n: usize) -> Vec<Rect> {
        if n == 0 {
            return Vec::new();
        }
        let gap = self.gap as f64;
        let available = (bounds.width - gap * (n - 1) as f64).max(0.0);
        let w = available / n as f64;
        (0..n)
            .map(|i| Rect {
                x: bounds.x + i as f64 * (w + gap),
                y: bounds.y,
                width: w,
                height: bounds.height,
            })
            .collect()
    }
}
