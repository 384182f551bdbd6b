//! Duel Pong - a classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Player preferences persisted to LocalStorage

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Logical drawing surface dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Player paddle travel per tick
    pub const PLAYER_PADDLE_SPEED: f32 = 5.0;
    /// AI paddle travel per tick (slower than the player, so it can be beaten)
    pub const AI_PADDLE_SPEED: f32 = 3.0;

    /// Ball defaults - velocity components are pixels per tick
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 4.0;

    /// First side to reach this score wins
    pub const WINNING_SCORE: u32 = 5;

    /// Net geometry: short dashes down the horizontal center
    pub const NET_SEGMENT_WIDTH: f32 = 2.0;
    pub const NET_SEGMENT_HEIGHT: f32 = 20.0;
    pub const NET_SEGMENT_SPACING: f32 = 30.0;
}
