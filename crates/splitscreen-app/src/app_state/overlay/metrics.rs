//! Box metrics of the overlay page, shared by its stylesheet and the
//! host-side sizing of the overlay webview.

use super::view::MenuRow;
use crate::app_state::types::GEAR_SIZE;

/// Width of the title column at the start of each row.
pub(crate) const TITLE_WIDTH: f64 = 96.0;

/// Fixed border-box size of a menu button.
pub(crate) const BUTTON_WIDTH: f64 = 52.0;
pub(crate) const BUTTON_HEIGHT: f64 = 32.0;

/// Right margin after every button.
pub(crate) const BUTTON_GAP: f64 = 6.0;

/// Vertical margin around every row.
pub(crate) const ROW_GAP: f64 = 6.0;

/// Horizontal and vertical padding inside the menu panel.
pub(crate) const MENU_PADDING_X: f64 = 12.0;
pub(crate) const MENU_PADDING_Y: f64 = 10.0;

/// Offset of the menu panel below the top of the overlay (clears the gear).
pub(crate) const MENU_TOP: f64 = 60.0;

/// Width a row occupies with every button on one line.
pub(crate) fn row_width(buttons: usize) -> f64 {
    TITLE_WIDTH + buttons as f64 * (BUTTON_WIDTH + BUTTON_GAP)
}

/// Logical size the open menu needs so no row is clipped.
///
/// Rows never wrap; adjacent row margins collapse into one gap.
pub(crate) fn menu_size(rows: &[MenuRow]) -> (f64, f64) {
    let widest = rows
        .iter()
        .map(|r| row_width(r.buttons.len()))
        .fold(0.0, f64::max);
    let width = (widest + 2.0 * MENU_PADDING_X).max(GEAR_SIZE.0);

    let n = rows.len() as f64;
    let panel = n * BUTTON_HEIGHT + (n + 1.0) * ROW_GAP + 2.0 * MENU_PADDING_Y;
    let height = (MENU_TOP + panel).max(GEAR_SIZE.1);
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::menu::SplitState;
    use crate::app_state::overlay::view::MenuView;
    use splitscreen_common::{Action, MAX_PANES};

    /// Button count of the longest row, derived straight from the actions.
    fn longest_row(pane_count: usize) -> usize {
        let actions = Action::menu_actions(pane_count);
        let mut best = 0;
        let mut run = 0;
        let mut current = None;
        for action in &actions {
            let group = action.menu_group();
            if group == current {
                run += 1;
            } else {
                current = group;
                run = 1;
            }
            best = best.max(run);
        }
        best
    }

    #[test]
    fn full_menu_fits_widest_row() {
        let view = MenuView::from_state(&SplitState::new(MAX_PANES, MAX_PANES, true));
        let (width, _) = menu_size(&view.rows);

        // Sound row at four panes: "None" plus one button per pane.
        assert_eq!(longest_row(MAX_PANES), MAX_PANES + 1);
        let needed = 2.0 * MENU_PADDING_X + row_width(longest_row(MAX_PANES));
        assert!(width >= needed, "width {width} < needed {needed}");
    }

    #[test]
    fn menu_height_covers_every_row() {
        let view = MenuView::from_state(&SplitState::new(MAX_PANES, 0, true));
        let (_, height) = menu_size(&view.rows);
        let rows = view.rows.len() as f64;
        assert!(height >= MENU_TOP + rows * (BUTTON_HEIGHT + ROW_GAP));
    }

    #[test]
    fn menu_grows_with_pane_count() {
        let one = MenuView::from_state(&SplitState::new(1, 1, true));
        let four = MenuView::from_state(&SplitState::new(4, 1, true));
        assert!(menu_size(&four.rows).0 > menu_size(&one.rows).0);
    }

    #[test]
    fn empty_menu_is_at_least_the_gear() {
        assert_eq!(menu_size(&[]).0, GEAR_SIZE.0);
        assert!(menu_size(&[]).1 >= GEAR_SIZE.1);
    }
}
