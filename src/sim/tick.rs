//! Frame transition pipeline
//!
//! One tick is five pure sub-stages composed in fixed order, each consuming
//! the previous stage's output and never re-reading stale pre-tick values:
//!
//! 1. opponent decisions (both paddles move)
//! 2. physics integration
//! 3. wall collision
//! 4. paddle collision (against the post-movement paddles)
//! 5. scoring
//!
//! The composed result is one fully-formed next-tick state committed to the
//! store as a single write.

use rand::Rng;

use super::ai;
use super::state::{Ball, GameState, Paddle, Side, StateError, StateStore};
use crate::consts::*;

/// Observable events from one tick, for the driver's audio cues and logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Set exactly on ticks where a point was scored, naming the scorer
    pub scored: Option<Side>,
    /// Ball reversed off a paddle this tick (never set on scoring ticks)
    pub paddle_hit: bool,
}

/// Advance the store by one tick
///
/// Reads a snapshot, computes the next state, and commits it atomically.
/// A snapshot violating the state invariants is a precondition failure and
/// leaves the store untouched.
pub fn tick(store: &mut StateStore, rng: &mut impl Rng) -> Result<TickEvents, StateError> {
    let snapshot = store.read();
    let (next, events) = next_state(&snapshot, rng)?;
    store.commit(next);
    Ok(events)
}

/// Pure transition: pre-tick snapshot in, next-tick state out
pub fn next_state(
    state: &GameState,
    rng: &mut impl Rng,
) -> Result<(GameState, TickEvents), StateError> {
    state.validate()?;

    let (left, right) = opponents_stage(state, rng);
    let ball = integrate_stage(state.ball);
    let ball = wall_stage(ball);
    let (ball, paddle_hit) = paddle_stage(ball, left, right);
    let (ball, scored) = score_stage(ball, rng);
    // A same-tick save that still crossed the boundary counts as the score
    // alone; the contact never happened as far as observers go.
    let paddle_hit = paddle_hit && scored.is_none();

    let next = GameState {
        ball,
        left,
        right,
        score_left: state.score_left + u32::from(scored == Some(Side::Left)),
        score_right: state.score_right + u32::from(scored == Some(Side::Right)),
        frame_index: state.frame_index + 1,
    };
    Ok((next, TickEvents { scored, paddle_hit }))
}

/// Stage 1: both paddles decide and move, independently, from the pre-tick
/// snapshot. Draw order (left, then right) is fixed for reproducibility.
fn opponents_stage(state: &GameState, rng: &mut impl Rng) -> (Paddle, Paddle) {
    let left = ai::step(state.left, ai::decide(Side::Left, state.left, state.ball, rng));
    let right = ai::step(
        state.right,
        ai::decide(Side::Right, state.right, state.ball, rng),
    );
    (left, right)
}

/// Stage 2: unconditional position advance by the velocity
fn integrate_stage(ball: Ball) -> Ball {
    Ball {
        x: ball.x + ball.vx,
        y: ball.y + ball.vy,
        ..ball
    }
}

/// Stage 3: reflect off the top/bottom walls within the same tick
fn wall_stage(ball: Ball) -> Ball {
    if ball.y <= BALL_MIN_Y || ball.y >= BALL_MAX_Y {
        Ball {
            y: ball.y.clamp(BALL_MIN_Y, BALL_MAX_Y),
            vy: -ball.vy,
            ..ball
        }
    } else {
        ball
    }
}

/// Rebound angle from the relative hit position on a 7-cell paddle
///
/// The zone split is intentionally asymmetric (1/2/2/1/1): a 2-cell upper
/// diagonal band against a 1-cell straight band at the bottom half.
pub fn rebound_vy(h: i32) -> i32 {
    match h {
        0 => -2,
        1 | 2 => -1,
        3 | 4 => 0,
        5 => 1,
        _ => 2,
    }
}

/// Stage 4: paddle contact against the post-movement paddle spans
///
/// Contact reverses `vx` and recomputes `vy` from where on the face the
/// ball landed. A ball passing the column with no paddle in reach keeps
/// going toward the boundary.
fn paddle_stage(ball: Ball, left: Paddle, right: Paddle) -> (Ball, bool) {
    let contact = if ball.x <= LEFT_PADDLE_X && ball.vx < 0 && left.contains(ball.y) {
        Some(left)
    } else if ball.x >= RIGHT_PADDLE_X && ball.vx > 0 && right.contains(ball.y) {
        Some(right)
    } else {
        None
    };

    match contact {
        Some(paddle) => {
            let hit = Ball {
                vx: -ball.vx,
                vy: rebound_vy(ball.y - paddle.top),
                ..ball
            };
            (hit, true)
        }
        None => (ball, false),
    }
}

/// Stage 5: scoring and serve reset
///
/// The serve travels toward the side that just scored (the flip of the
/// scoring approach, so it can never re-score on the next tick) from the
/// exact court center, with a fresh vertical angle drawn from the injected
/// RNG. Paddles are unaffected.
fn score_stage(ball: Ball, rng: &mut impl Rng) -> (Ball, Option<Side>) {
    let scored = if ball.x < LEFT_PADDLE_X {
        Some(Side::Right)
    } else if ball.x > RIGHT_PADDLE_X {
        Some(Side::Left)
    } else {
        None
    };

    match scored {
        Some(side) => {
            // The serve direction comes from the scoring side, not the
            // incoming velocity: a paddle save on the same tick the ball
            // crosses the boundary has already flipped vx.
            let vx = match side {
                Side::Right => 1,
                Side::Left => -1,
            };
            // Uniform in {-2..=2} from a single [0, 1) draw.
            let vy = (rng.random::<f64>() * 5.0) as i32 - 2;
            let serve = Ball {
                x: CENTER_X,
                y: CENTER_Y,
                vx,
                vy,
            };
            (serve, Some(side))
        }
        None => (ball, None),
    }
}
