//=========================================================================
// Touch Pad
//=========================================================================
//
// Hit-testing for the on-screen button grid.
//
// Layout (bottom-centred inside the window margin):
// ```text
//   ┌─────────┬─────────┬─────────┐
//   │    1    │   Up    │    2    │
//   ├─────────┼─────────┼─────────┤
//   │  Left   │  More   │  Right  │
//   ├─────────┼─────────┼─────────┤
//   │    3    │  Down   │    4    │
//   └─────────┴─────────┴─────────┘
// ```
//
// All coordinates are logical pixels. Quit has no on-screen button; it is
// reached through Escape or by closing the window. The grid is not drawn.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::Button;

//=== Geometry ============================================================

const WINDOW_MARGIN: f64 = 10.0;
const BUTTON_WIDTH: f64 = 100.0;
const BUTTON_HEIGHT: f64 = 60.0;
const BUTTON_MARGIN: f64 = 2.0;

const CELL_WIDTH: f64 = BUTTON_WIDTH + 2.0 * BUTTON_MARGIN;
const CELL_HEIGHT: f64 = BUTTON_HEIGHT + 2.0 * BUTTON_MARGIN;

const GRID: [[Button; 3]; 3] = [
    [Button::Action1, Button::Up, Button::Action2],
    [Button::Left, Button::More, Button::Right],
    [Button::Action3, Button::Down, Button::Action4],
];

//=== Hit Testing =========================================================

/// Top-left corner of the grid for a window of the given logical size.
fn grid_origin(window: (f64, f64)) -> (f64, f64) {
    let content_width = window.0 - 2.0 * WINDOW_MARGIN;
    let left = WINDOW_MARGIN + (content_width - 3.0 * CELL_WIDTH) / 2.0;
    let top = window.1 - WINDOW_MARGIN - 3.0 * CELL_HEIGHT;
    (left, top)
}

/// Button under `point`, if any.
pub(crate) fn hit_test(window: (f64, f64), point: (f64, f64)) -> Option<Button> {
    let (left, top) = grid_origin(window);
    let x = point.0 - left;
    let y = point.1 - top;

    if x < 0.0 || y < 0.0 {
        return None;
    }

    let col = (x / CELL_WIDTH) as usize;
    let row = (y / CELL_HEIGHT) as usize;
    if col >= 3 || row >= 3 {
        return None;
    }

    let in_x = x - col as f64 * CELL_WIDTH;
    let in_y = y - row as f64 * CELL_HEIGHT;
    let on_button = (BUTTON_MARGIN..BUTTON_MARGIN + BUTTON_WIDTH).contains(&in_x)
        && (BUTTON_MARGIN..BUTTON_MARGIN + BUTTON_HEIGHT).contains(&in_y);

    on_button.then(|| GRID[row][col])
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: (f64, f64) = (350.0, 600.0);

    fn cell_centre(row: usize, col: usize) -> (f64, f64) {
        let (left, top) = grid_origin(WINDOW);
        (
            left + (col as f64 + 0.5) * CELL_WIDTH,
            top + (row as f64 + 0.5) * CELL_HEIGHT,
        )
    }

    #[test]
    fn grid_is_bottom_centred() {
        let (left, top) = grid_origin(WINDOW);
        assert_eq!(left, 19.0);
        assert_eq!(top, 600.0 - 10.0 - 192.0);
    }

    #[test]
    fn cell_centres_hit_their_buttons() {
        for (row, buttons) in GRID.iter().enumerate() {
            for (col, button) in buttons.iter().enumerate() {
                assert_eq!(hit_test(WINDOW, cell_centre(row, col)), Some(*button));
            }
        }
    }

    #[test]
    fn quit_is_not_on_screen() {
        assert!(GRID.iter().flatten().all(|b| *b != Button::Quit));
    }

    #[test]
    fn outside_grid_misses() {
        assert_eq!(hit_test(WINDOW, (5.0, 5.0)), None);
        assert_eq!(hit_test(WINDOW, (175.0, 100.0)), None);
        assert_eq!(hit_test(WINDOW, (349.0, 599.0)), None);
        assert_eq!(hit_test(WINDOW, (-1.0, 500.0)), None);
    }

    #[test]
    fn button_margin_misses() {
        let (left, top) = grid_origin(WINDOW);
        assert_eq!(hit_test(WINDOW, (left + 1.0, top + 30.0)), None);
        assert_eq!(hit_test(WINDOW, (left + 50.0, top + 63.0)), None);
        assert_eq!(hit_test(WINDOW, (left + 2.0, top + 2.0)), Some(Button::Action1));
    }

    #[test]
    fn layout_follows_window_size() {
        let wide = (800.0, 600.0);
        let (left, top) = grid_origin(wide);
        assert_eq!(
            hit_test(wide, (left + 1.5 * CELL_WIDTH, top + 1.5 * CELL_HEIGHT)),
            Some(Button::More)
        );
    }
}
