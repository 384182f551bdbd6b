//! Fixed timestep simulation tick
//!
//! Advances the game by exactly one tick. Velocities are expressed per
//! tick, so there is no delta-time anywhere in the simulation; the driver
//! is assumed to fire at a constant 60 Hz.

use super::collision;
use super::state::{GamePhase, GameState, Winner};
use crate::consts::*;

/// Held-key flags sampled once per tick (level-triggered)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

/// Advance the game state by one fixed tick
///
/// No-op while the game is over; restart replaces the state wholesale
/// rather than transitioning back through here.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::Over {
        return;
    }

    state.time_ticks += 1;

    move_ball(state);
    move_player(state, input);
    move_ai(state);
}

/// Ball motion and everything it can trigger within one tick: bounces,
/// then scoring, then the termination check
fn move_ball(state: &mut GameState) {
    state.ball.pos += state.ball.vel;

    // Top and bottom walls reflect. No positional correction: the ball may
    // overlap the bound by one tick's travel.
    if collision::hits_horizontal_wall(&state.ball) {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // At most one paddle bounce per tick; the player paddle wins the tie.
    if collision::hits_left_paddle(&state.ball, &state.player) {
        state.ball.vel.x = -state.ball.vel.x;
    } else if collision::hits_right_paddle(&state.ball, &state.ai) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    if state.ball.left() < 0.0 {
        state.score.ai += 1;
        state.ball.reset();
    } else if state.ball.right() > CANVAS_WIDTH {
        state.score.player += 1;
        state.ball.reset();
    }

    // Scores advance by one and are checked every tick, so equality is
    // sufficient here.
    if state.score.player == WINNING_SCORE {
        state.phase = GamePhase::Over;
        state.winner = Some(Winner::Player);
    } else if state.score.ai == WINNING_SCORE {
        state.phase = GamePhase::Over;
        state.winner = Some(Winner::Ai);
    }
}

/// Apply held-key movement, stopping at the canvas edges. Both flags are
/// applied independently; holding both cancels out away from the edges.
fn move_player(state: &mut GameState, input: &TickInput) {
    if input.up && state.player.top() > 0.0 {
        state.player.pos.y -= state.player.speed;
    }
    if input.down && state.player.bottom() < CANVAS_HEIGHT {
        state.player.pos.y += state.player.speed;
    }
}

/// Reactive tracking: step toward the ball's vertical position. The AI
/// paddle is not clamped and may overshoot the canvas edges.
fn move_ai(state: &mut GameState) {
    if state.ball.pos.y < state.ai.center_y() {
        state.ai.pos.y -= state.ai.speed;
    } else if state.ball.pos.y > state.ai.center_y() {
        state.ai.pos.y += state.ai.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Score;
    use glam::Vec2;

    fn held(up: bool, down: bool) -> TickInput {
        TickInput { up, down }
    }

    #[test]
    fn ball_advances_by_its_velocity() {
        let mut state = GameState::new();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos, Vec2::new(404.0, 304.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn finished_game_does_not_advance() {
        let mut state = GameState::new();
        state.phase = GamePhase::Over;
        state.winner = Some(Winner::Ai);
        let before = state.clone();

        tick(&mut state, &held(true, false));

        assert_eq!(state.ball, before.ball);
        assert_eq!(state.player, before.player);
        assert_eq!(state.ai, before.ai);
        assert_eq!(state.score, before.score);
        assert_eq!(state.time_ticks, before.time_ticks);
    }

    #[test]
    fn bottom_wall_bounce_inverts_sign_and_preserves_magnitude() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(400.0, 588.0);

        // moves to y = 592, bottom edge 602 crosses the bound
        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel.y, -BALL_SPEED);
        assert_eq!(state.ball.vel.x, BALL_SPEED);
    }

    #[test]
    fn top_wall_bounce_inverts_sign() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(400.0, 12.0);
        state.ball.vel = Vec2::new(BALL_SPEED, -BALL_SPEED);

        // moves to y = 8, top edge -2 crosses the bound
        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel.y, BALL_SPEED);
    }

    #[test]
    fn ai_scores_when_ball_exits_left() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(12.0, 100.0);
        state.ball.vel = Vec2::new(-BALL_SPEED, BALL_SPEED);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score.ai, 1);
        assert_eq!(state.score.player, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        // serve direction is the inversion of the scoring direction
        assert_eq!(state.ball.vel.x, BALL_SPEED);
    }

    #[test]
    fn player_scores_when_ball_exits_right() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(788.0, 100.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score.player, 1);
        assert_eq!(state.score.ai, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel.x, -BALL_SPEED);
    }

    #[test]
    fn player_reaching_threshold_ends_the_game() {
        let mut state = GameState::new();
        state.score.player = WINNING_SCORE - 1;
        // exits right at y = 104, clear of the centered AI paddle
        state.ball.pos = Vec2::new(788.0, 100.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score.player, WINNING_SCORE);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.winner, Some(Winner::Player));
    }

    #[test]
    fn ai_reaching_threshold_ends_the_game() {
        let mut state = GameState::new();
        state.score.ai = WINNING_SCORE - 1;
        state.ball.pos = Vec2::new(12.0, 100.0);
        state.ball.vel = Vec2::new(-BALL_SPEED, BALL_SPEED);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score.ai, WINNING_SCORE);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.winner, Some(Winner::Ai));
    }

    #[test]
    fn scores_below_threshold_keep_playing() {
        let mut state = GameState::new();
        state.score.player = WINNING_SCORE - 1;
        state.score.ai = WINNING_SCORE - 1;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.winner, None);
    }

    #[test]
    fn player_paddle_wins_a_simultaneous_overlap() {
        // An oversized ball overlaps both paddles in the same tick; the
        // else-if tie-break must flip the horizontal velocity exactly once.
        let mut state = GameState::new();
        state.ball.radius = 400.0;
        state.ball.pos = Vec2::new(396.0, 296.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel.x, -BALL_SPEED);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn left_paddle_bounce_returns_the_ball() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(20.0, 300.0);
        state.ball.vel = Vec2::new(-BALL_SPEED, BALL_SPEED);

        // moves to x = 16, left edge 6 is within the paddle face at y 304
        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel.x, BALL_SPEED);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn player_paddle_clamps_at_the_top() {
        let mut state = GameState::new();
        let input = held(true, false);
        for _ in 0..200 {
            tick(&mut state, &input);
        }
        assert_eq!(state.player.top(), 0.0);
    }

    #[test]
    fn player_paddle_clamps_at_the_bottom() {
        let mut state = GameState::new();
        let input = held(false, true);
        for _ in 0..200 {
            tick(&mut state, &input);
        }
        assert_eq!(state.player.bottom(), CANVAS_HEIGHT);
    }

    #[test]
    fn holding_both_keys_is_a_standstill() {
        let mut state = GameState::new();
        let before = state.player.pos;
        tick(&mut state, &held(true, true));
        assert_eq!(state.player.pos, before);
    }

    #[test]
    fn ai_paddle_tracks_the_ball() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(400.0, 100.0);
        let before = state.ai.pos.y;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ai.pos.y, before - AI_PADDLE_SPEED);

        let mut state = GameState::new();
        state.ball.pos = Vec2::new(400.0, 500.0);
        let before = state.ai.pos.y;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ai.pos.y, before + AI_PADDLE_SPEED);
    }

    #[test]
    fn fresh_state_replaces_a_finished_game() {
        let mut state = GameState::new();
        state.score.ai = WINNING_SCORE - 1;
        state.ball.pos = Vec2::new(12.0, 100.0);
        state.ball.vel = Vec2::new(-BALL_SPEED, BALL_SPEED);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Over);

        // restart is whole-state replacement
        state = GameState::new();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.winner, None);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(BALL_SPEED, BALL_SPEED));
    }

    #[test]
    fn ball_bounces_off_the_bottom_after_a_straight_run() {
        // From the start state y grows by 4 per tick; tick 73 puts the
        // bottom edge past 600 and flips the vertical direction in place.
        let mut state = GameState::new();
        for _ in 0..72 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.ball.vel.y, BALL_SPEED);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.y, -BALL_SPEED);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn player_paddle_never_leaves_the_canvas(
                inputs in proptest::collection::vec(any::<(bool, bool)>(), 0..400)
            ) {
                let mut state = GameState::new();
                for (up, down) in inputs {
                    tick(&mut state, &TickInput { up, down });
                    prop_assert!(state.player.top() >= 0.0);
                    prop_assert!(state.player.bottom() <= CANVAS_HEIGHT);
                }
            }

            #[test]
            fn ball_moves_by_exactly_its_velocity_away_from_walls(
                x in 100.0_f32..700.0,
                y in 100.0_f32..500.0,
            ) {
                let mut state = GameState::new();
                state.ball.pos = Vec2::new(x, y);
                let expected = state.ball.pos + state.ball.vel;
                tick(&mut state, &TickInput::default());
                prop_assert_eq!(state.ball.pos, expected);
            }
        }
    }
}
