//! Pong TTY - a self-playing Pong for 80x25 terminals
//!
//! Core modules:
//! - `sim`: deterministic simulation (AI decisions, physics, collisions, scoring)
//! - `render`: pure character-grid renderer
//! - `settings`: runtime frame-rate and sound preferences
//!
//! The simulation advances one tick at a time through a fixed five-stage
//! pipeline and carries no wall-clock dependency; the terminal driver in
//! `main.rs` owns pacing, input, and audio cues.

pub mod render;
pub mod settings;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Court width in character cells
    pub const COURT_W: i32 = 80;
    /// Court height in character cells (top and bottom rows are border)
    pub const COURT_H: i32 = 25;
    /// Paddle height in cells
    pub const PADDLE_H: i32 = 7;

    /// Left paddle column
    pub const LEFT_PADDLE_X: i32 = 1;
    /// Right paddle column
    pub const RIGHT_PADDLE_X: i32 = COURT_W - 2;

    /// Lowest legal paddle top edge (row 0 is border)
    pub const PADDLE_MIN_Y: i32 = 1;
    /// Highest legal paddle top edge
    pub const PADDLE_MAX_Y: i32 = COURT_H - PADDLE_H - 1;

    /// Top of the playable band for the ball
    pub const BALL_MIN_Y: i32 = 1;
    /// Bottom of the playable band for the ball
    pub const BALL_MAX_Y: i32 = COURT_H - 2;

    /// Court center, where the ball spawns and respawns
    pub const CENTER_X: i32 = COURT_W / 2;
    pub const CENTER_Y: i32 = COURT_H / 2;

    /// Horizontal distance at which an approaching ball triggers trick-shot
    /// targeting instead of defensive tracking
    pub const TRICK_RANGE: i32 = 5;
    /// Per-tick probability that defensive tracking actually moves the
    /// paddle. The 8% failure rate keeps the AI beatable.
    pub const TRACK_ACCURACY: f64 = 0.92;
}
