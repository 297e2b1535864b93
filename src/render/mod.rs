//! Court renderer
//!
//! `render` is a pure, total function from an in-invariant [`GameState`] to
//! an immutable 25-row by 80-column character grid. Every cell gets exactly
//! one classification, in priority order: border > paddle > ball > center
//! line > background. No side effects, identical output for identical input.

pub mod digits;

pub use digits::overlay_scores;

use crate::consts::*;
use crate::sim::GameState;

/// Top and bottom border rows
pub const BORDER: char = '▀';
/// Paddles, ball, and center line
pub const BLOCK: char = '█';
/// Empty court
pub const BLANK: char = ' ';

/// One rendered 80x25 frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    cells: [[char; COURT_W as usize]; COURT_H as usize],
}

impl Frame {
    /// The frame as 25 strings of exactly 80 characters, top to bottom
    pub fn lines(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }

    /// Character at a cell (column, row)
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the 80x25 grid; unlike
    /// `set`, reading a cell that does not exist is a caller bug.
    pub fn cell(&self, x: i32, y: i32) -> char {
        assert!(
            (0..COURT_W).contains(&x) && (0..COURT_H).contains(&y),
            "cell ({x}, {y}) outside the {COURT_W}x{COURT_H} grid"
        );
        self.cells[y as usize][x as usize]
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, ch: char) {
        if (0..COURT_W).contains(&x) && (0..COURT_H).contains(&y) {
            self.cells[y as usize][x as usize] = ch;
        }
    }
}

/// Render a state snapshot into a frame
pub fn render(state: &GameState) -> Frame {
    let mut cells = [[BLANK; COURT_W as usize]; COURT_H as usize];
    for (y, row) in cells.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = classify(state, x as i32, y as i32);
        }
    }
    Frame { cells }
}

fn classify(state: &GameState, x: i32, y: i32) -> char {
    if y == 0 || y == COURT_H - 1 {
        BORDER
    } else if x == LEFT_PADDLE_X && state.left.contains(y) {
        BLOCK
    } else if x == RIGHT_PADDLE_X && state.right.contains(y) {
        BLOCK
    } else if x == state.ball.x && y == state.ball.y {
        BLOCK
    } else if x == CENTER_X && y % 2 == 0 {
        // Dashed center line on even rows
        BLOCK
    } else {
        BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Ball, Paddle};

    #[test]
    fn test_frame_shape() {
        let frame = render(&GameState::new());
        let lines = frame.lines();
        assert_eq!(lines.len(), 25);
        for line in &lines {
            assert_eq!(line.chars().count(), 80);
        }
    }

    #[test]
    fn test_border_rows() {
        let frame = render(&GameState::new());
        let lines = frame.lines();
        assert!(lines[0].chars().all(|c| c == BORDER));
        assert!(lines[24].chars().all(|c| c == BORDER));
    }

    #[test]
    fn test_paddle_columns_have_seven_contiguous_cells() {
        let mut state = GameState::new();
        state.left = Paddle { top: 3 };
        state.right = Paddle { top: 14 };
        // Keep the ball away from both paddle columns.
        state.ball = Ball { x: 20, y: 5, vx: 1, vy: 0 };
        let frame = render(&state);

        for (x, top) in [(LEFT_PADDLE_X, 3), (RIGHT_PADDLE_X, 14)] {
            let blocks: Vec<i32> = (1..COURT_H - 1)
                .filter(|&y| frame.cell(x, y) == BLOCK)
                .collect();
            let expected: Vec<i32> = (top..top + PADDLE_H).collect();
            assert_eq!(blocks, expected, "column {x}");
        }
    }

    #[test]
    fn test_exactly_one_ball_cell() {
        let mut state = GameState::new();
        state.ball = Ball { x: 17, y: 7, vx: 1, vy: 1 };
        let frame = render(&state);

        assert_eq!(frame.cell(17, 7), BLOCK);
        // Off the paddle and center-line columns, the ball is the only
        // block in its row and column.
        let row_blocks = (0..COURT_W)
            .filter(|&x| ![LEFT_PADDLE_X, RIGHT_PADDLE_X, CENTER_X].contains(&x))
            .filter(|&x| frame.cell(x, 7) == BLOCK)
            .count();
        assert_eq!(row_blocks, 1);
        let col_blocks = (1..COURT_H - 1)
            .filter(|&y| frame.cell(17, y) == BLOCK)
            .count();
        assert_eq!(col_blocks, 1);
    }

    #[test]
    fn test_center_line_dashes_on_even_rows() {
        let mut state = GameState::new();
        state.ball = Ball { x: 17, y: 7, vx: 1, vy: 0 };
        let frame = render(&state);

        for y in 1..COURT_H - 1 {
            let expected = if y % 2 == 0 { BLOCK } else { BLANK };
            assert_eq!(frame.cell(CENTER_X, y), expected, "row {y}");
        }
    }

    #[test]
    fn test_border_beats_paddle_and_center_line() {
        // Paddle span and center line both touch border-adjacent rows only
        // inside the court; rows 0 and 24 stay border everywhere.
        let mut state = GameState::new();
        state.left = Paddle { top: 1 };
        let frame = render(&state);
        assert_eq!(frame.cell(LEFT_PADDLE_X, 0), BORDER);
        assert_eq!(frame.cell(CENTER_X, 0), BORDER);
        assert_eq!(frame.cell(CENTER_X, 24), BORDER);
        assert_eq!(frame.cell(LEFT_PADDLE_X, 1), BLOCK);
    }

    #[test]
    #[should_panic(expected = "outside the 80x25 grid")]
    fn test_cell_outside_grid_panics() {
        let frame = render(&GameState::new());
        frame.cell(COURT_W, 0);
    }

    #[test]
    fn test_deterministic() {
        let state = GameState::new();
        assert_eq!(render(&state), render(&state));
    }
}
