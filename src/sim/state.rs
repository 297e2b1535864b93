//! Game state and the state store
//!
//! One small fixed-shape record holds everything the simulation knows. The
//! transition engine is the only writer; the renderer only ever sees a
//! committed snapshot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Which player a paddle or a point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Ball position and discretized velocity
///
/// `vx` is always -1 or +1; its sign flips exactly on paddle contact.
/// `vy` is confined to `{-2, -1, 0, 1, 2}` and is recomputed from the hit
/// position on every paddle contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
}

/// A fixed-height vertical paddle, identified by its top-edge row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub top: i32,
}

impl Paddle {
    /// Build a paddle with its top clamped to the playable band
    pub fn clamped(top: i32) -> Self {
        Self {
            top: top.clamp(PADDLE_MIN_Y, PADDLE_MAX_Y),
        }
    }

    /// Row of the paddle's vertical center
    #[inline]
    pub fn center(&self) -> i32 {
        self.top + PADDLE_H / 2
    }

    /// Whether a row lies within the paddle's 7-cell span
    #[inline]
    pub fn contains(&self, y: i32) -> bool {
        y >= self.top && y < self.top + PADDLE_H
    }
}

/// Invariant violation in a pre-tick snapshot
///
/// These are precondition failures, not runtime conditions: the transition
/// engine refuses to advance a malformed state instead of silently
/// repairing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("ball out of bounds at ({x}, {y})")]
    BallOutOfBounds { x: i32, y: i32 },
    #[error("{side:?} paddle top {top} outside playable band")]
    PaddleOutOfBounds { side: Side, top: i32 },
    #[error("malformed velocity ({vx}, {vy})")]
    MalformedVelocity { vx: i32, vy: i32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score_left: u32,
    pub score_right: u32,
    /// Tick counter, incremented exactly once per transition
    pub frame_index: u64,
}

impl GameState {
    /// Starting state: ball at court center serving left, paddles centered,
    /// scores zero.
    pub fn new() -> Self {
        let paddle_top = (COURT_H - PADDLE_H) / 2;
        Self {
            ball: Ball {
                x: CENTER_X,
                y: CENTER_Y,
                vx: -1,
                vy: 0,
            },
            left: Paddle { top: paddle_top },
            right: Paddle { top: paddle_top },
            score_left: 0,
            score_right: 0,
            frame_index: 0,
        }
    }

    /// Check the state invariants on a snapshot
    ///
    /// The ball check covers the full court span `[0, COURT_W - 1]`: the
    /// single tick where the ball has crossed a scoring boundary resolves
    /// within that same tick, so a committed state never holds a wider x.
    pub fn validate(&self) -> Result<(), StateError> {
        let Ball { x, y, vx, vy } = self.ball;
        if vx.abs() != 1 || !(-2..=2).contains(&vy) {
            return Err(StateError::MalformedVelocity { vx, vy });
        }
        if !(0..COURT_W).contains(&x) || !(BALL_MIN_Y..=BALL_MAX_Y).contains(&y) {
            return Err(StateError::BallOutOfBounds { x, y });
        }
        for (side, paddle) in [(Side::Left, self.left), (Side::Right, self.right)] {
            if !(PADDLE_MIN_Y..=PADDLE_MAX_Y).contains(&paddle.top) {
                return Err(StateError::PaddleOutOfBounds {
                    side,
                    top: paddle.top,
                });
            }
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of the authoritative game state
///
/// `read` hands out a snapshot and `commit` replaces the whole record in one
/// indivisible step, so the renderer and the next tick can never observe a
/// half-written transition.
#[derive(Debug)]
pub struct StateStore {
    state: GameState,
}

impl StateStore {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Snapshot of the current authoritative state
    pub fn read(&self) -> GameState {
        self.state
    }

    /// Replace the authoritative state with a fully-formed next tick
    pub fn commit(&mut self, next: GameState) {
        self.state = next;
    }
}
