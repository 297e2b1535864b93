//! Big score digits
//!
//! Classic Pong scoreboard: 3x5 block digits composited onto a rendered
//! frame by the driver, left score right-aligned toward the center line,
//! right score left-aligned past it. This overlay sits outside the pure
//! court-render contract on purpose; `render` stays total and minimal.

use super::Frame;

/// 3x5 glyphs for digits 0-9
const GLYPHS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// Scoreboard row
const SCORE_Y: i32 = 1;
/// Left score ends at this column (right-aligned)
const LEFT_SCORE_END_X: i32 = 38;
/// Right score starts at this column
const RIGHT_SCORE_START_X: i32 = 43;
/// Horizontal pitch per digit (3 cells wide plus 1 of spacing)
const DIGIT_PITCH: i32 = 4;

/// Composite both scores onto a frame
pub fn overlay_scores(frame: &mut Frame, score_left: u32, score_right: u32) {
    let left = score_left.to_string();
    let start = LEFT_SCORE_END_X - (left.len() as i32 * DIGIT_PITCH - 1);
    for (i, digit) in left.bytes().enumerate() {
        draw_digit(frame, digit - b'0', start + i as i32 * DIGIT_PITCH, SCORE_Y);
    }

    for (i, digit) in score_right.to_string().bytes().enumerate() {
        draw_digit(
            frame,
            digit - b'0',
            RIGHT_SCORE_START_X + i as i32 * DIGIT_PITCH,
            SCORE_Y,
        );
    }
}

fn draw_digit(frame: &mut Frame, digit: u8, x: i32, y: i32) {
    let glyph = GLYPHS[digit as usize];
    for (dy, row) in glyph.iter().enumerate() {
        for (dx, ch) in row.chars().enumerate() {
            frame.set(x + dx as i32, y + dy as i32, ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{BLANK, BLOCK, render};
    use crate::sim::GameState;

    #[test]
    fn test_zero_zero_scoreboard() {
        let mut frame = render(&GameState::new());
        overlay_scores(&mut frame, 0, 0);

        // Single left digit right-aligned: glyph spans columns 35..=37.
        assert_eq!(frame.cell(35, 1), BLOCK);
        assert_eq!(frame.cell(36, 1), BLOCK);
        assert_eq!(frame.cell(37, 1), BLOCK);
        // Middle of a zero is hollow.
        assert_eq!(frame.cell(36, 3), BLANK);
        // Right digit starts at column 43.
        assert_eq!(frame.cell(43, 1), BLOCK);
        assert_eq!(frame.cell(44, 3), BLANK);
    }

    #[test]
    fn test_multi_digit_score_right_aligned() {
        let mut frame = render(&GameState::new());
        overlay_scores(&mut frame, 12, 3);

        // Two digits: width 2*4-1 = 7, so the "1" glyph starts at column 31.
        assert_eq!(frame.cell(32, 1), BLOCK); // top of the 1
        assert_eq!(frame.cell(31, 1), BLANK);
        // Second digit (the 2) still ends at column 38.
        assert_eq!(frame.cell(37, 1), BLOCK);
        assert_eq!(frame.cell(35, 1), BLOCK);
    }

    #[test]
    fn test_overlay_leaves_court_rows_intact() {
        let state = GameState::new();
        let base = render(&state);
        let mut frame = base.clone();
        overlay_scores(&mut frame, 9, 9);

        // Glyphs occupy rows 1..=5 only; everything below is untouched.
        for y in 6..25 {
            for x in 0..80 {
                assert_eq!(frame.cell(x, y), base.cell(x, y), "({x}, {y})");
            }
        }
        assert_eq!(frame.lines()[0], base.lines()[0]);
    }
}
