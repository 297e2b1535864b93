//! Opponent decision logic
//!
//! Each paddle decides a per-tick vertical delta in `{-1, 0, +1}` from the
//! same pre-tick snapshot. Two behaviors:
//!
//! - *Trick-shot mode* when the ball is close and approaching: pick one of
//!   five contact offsets on the paddle face and steer so the ball lands on
//!   it, biasing the rebound angle.
//! - *Defensive mode* otherwise: step toward the ball, but only on 92% of
//!   ticks. The deliberate inaccuracy is what makes points happen.
//!
//! Exactly one RNG draw is consumed per paddle per tick regardless of mode,
//! which keeps tick-for-tick replays stable under a seeded generator.

use rand::Rng;

use super::state::{Ball, Paddle, Side};
use crate::consts::*;

/// Trick-shot contact offsets with their cumulative draw weights: four
/// roughly-equal bands plus a rare straight-shot band. Offset `o` means the
/// paddle wants contact at `h = o`, i.e. paddle top at `ball_y - o`.
/// Draws past the last threshold fall through to [`TRICK_TARGET_BOTTOM`].
const TRICK_TARGETS: [(f64, i32); 4] = [(0.25, 0), (0.50, 1), (0.55, 3), (0.775, 5)];
/// Steep-down contact at the paddle's bottom edge, the remaining band
const TRICK_TARGET_BOTTOM: i32 = 6;

/// Decide this tick's movement delta for one paddle
pub fn decide(side: Side, paddle: Paddle, ball: Ball, rng: &mut impl Rng) -> i32 {
    let (column, approaching) = match side {
        Side::Left => (LEFT_PADDLE_X, ball.vx < 0),
        Side::Right => (RIGHT_PADDLE_X, ball.vx > 0),
    };
    let draw: f64 = rng.random();

    if approaching && (ball.x - column).abs() <= TRICK_RANGE {
        let offset = TRICK_TARGETS
            .iter()
            .find(|&&(cum, _)| draw < cum)
            .map_or(TRICK_TARGET_BOTTOM, |&(_, offset)| offset);
        let target = (ball.y - offset).clamp(PADDLE_MIN_Y, PADDLE_MAX_Y);
        (target - paddle.top).signum()
    } else if draw < TRACK_ACCURACY {
        (ball.y - paddle.center()).signum()
    } else {
        0
    }
}

/// Apply a movement delta, clamped to the court
pub fn step(paddle: Paddle, delta: i32) -> Paddle {
    Paddle::clamped(paddle.top + delta)
}
