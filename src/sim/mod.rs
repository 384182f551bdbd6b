//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-tick velocities, no wall-clock time
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use state::{Ball, GamePhase, GameState, Paddle, Score, Winner};
pub use tick::{TickInput, tick};
