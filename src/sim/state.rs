//! Game state and core simulation types
//!
//! Everything the simulation step reads and writes lives here. The data
//! holder does no validation of its own; bounds and scoring invariants are
//! enforced by the tick.

use glam::Vec2;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A side reached the winning score
    Over,
}

/// Which side won the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Ai,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Player => "Player",
            Winner::Ai => "AI",
        }
    }
}

/// A paddle, positioned by its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical travel per tick
    pub speed: f32,
}

impl Paddle {
    /// Paddle at the given x, vertically centered
    pub fn new(x: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, CANVAS_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// The ball, positioned by its center
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-tick displacement, signed
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
            vel: Vec2::new(BALL_SPEED, BALL_SPEED),
            radius: BALL_RADIUS,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Serve after a score: re-center and send the ball back the way it
    /// came by negating the horizontal component.
    pub fn reset(&mut self) {
        self.pos = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        self.vel.x = -self.vel.x;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Score counters, reset only by restart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

/// Complete game state
///
/// Owned by the loop driver; the tick and the renderer receive it by
/// reference. Restart replaces the whole state with a fresh one rather
/// than patching fields, so tests never see residue from a prior game.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Recorded when phase becomes `Over`
    pub winner: Option<Winner>,
    /// Left paddle, keyboard controlled
    pub player: Paddle,
    /// Right paddle, tracks the ball
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Playing,
            winner: None,
            player: Paddle::new(0.0, PLAYER_PADDLE_SPEED),
            ai: Paddle::new(CANVAS_WIDTH - PADDLE_WIDTH, AI_PADDLE_SPEED),
            ball: Ball::new(),
            score: Score::default(),
            time_ticks: 0,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_canonical() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.winner, None);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(state.player.pos, Vec2::new(0.0, 250.0));
        assert_eq!(state.ai.pos, Vec2::new(790.0, 250.0));
    }

    #[test]
    fn ball_reset_recenters_and_flips_serve_direction() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(812.0, 77.0);
        ball.vel = Vec2::new(BALL_SPEED, -BALL_SPEED);
        ball.reset();
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(-BALL_SPEED, -BALL_SPEED));
    }

    #[test]
    fn paddle_edge_accessors() {
        let paddle = Paddle::new(790.0, AI_PADDLE_SPEED);
        assert_eq!(paddle.top(), 250.0);
        assert_eq!(paddle.bottom(), 350.0);
        assert_eq!(paddle.left(), 790.0);
        assert_eq!(paddle.right(), 800.0);
        assert_eq!(paddle.center_y(), 300.0);
    }
}
