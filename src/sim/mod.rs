//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - one tick per call, no wall-clock dependency
//! - injected, seeded RNG only (a capability parameter, never a global)
//! - no rendering or platform dependencies

pub mod ai;
pub mod state;
pub mod tick;

pub use state::{Ball, GameState, Paddle, Side, StateError, StateStore};
pub use tick::{TickEvents, next_state, rebound_vy, tick};
