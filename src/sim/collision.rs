//! Collision predicates for axis-aligned geometry
//!
//! The ball is a circle, but the tests treat its bounding edges as a box on
//! the axis under test: the horizontal tests use the ball's left/right
//! edges, the vertical containment uses the ball's center.

use super::state::{Ball, Paddle};
use crate::consts::CANVAS_HEIGHT;

/// Ball top or bottom edge crossed the canvas bounds
pub fn hits_horizontal_wall(ball: &Ball) -> bool {
    ball.top() < 0.0 || ball.bottom() > CANVAS_HEIGHT
}

/// Ball overlapping the left paddle: left edge within the paddle's right
/// edge, vertical center strictly inside the paddle's span
pub fn hits_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.left() < paddle.right() && ball.pos.y > paddle.top() && ball.pos.y < paddle.bottom()
}

/// Mirror image of [`hits_left_paddle`] for the right paddle
pub fn hits_right_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.right() > paddle.left() && ball.pos.y > paddle.top() && ball.pos.y < paddle.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(4.0, 4.0),
            radius: 10.0,
        }
    }

    #[test]
    fn wall_hit_at_top_and_bottom() {
        assert!(hits_horizontal_wall(&ball_at(400.0, 9.0)));
        assert!(hits_horizontal_wall(&ball_at(400.0, 591.0)));
        // touching exactly is not a hit
        assert!(!hits_horizontal_wall(&ball_at(400.0, 10.0)));
        assert!(!hits_horizontal_wall(&ball_at(400.0, 590.0)));
    }

    #[test]
    fn left_paddle_hit_requires_vertical_overlap() {
        let paddle = Paddle::new(0.0, 5.0); // spans y 250..350
        assert!(hits_left_paddle(&ball_at(15.0, 300.0), &paddle));
        // right x, wrong y
        assert!(!hits_left_paddle(&ball_at(15.0, 100.0), &paddle));
        // center exactly on the paddle edge does not count
        assert!(!hits_left_paddle(&ball_at(15.0, 250.0), &paddle));
        // ball clear of the paddle face
        assert!(!hits_left_paddle(&ball_at(50.0, 300.0), &paddle));
    }

    #[test]
    fn right_paddle_hit_is_symmetric() {
        let paddle = Paddle::new(790.0, 3.0);
        assert!(hits_right_paddle(&ball_at(785.0, 300.0), &paddle));
        assert!(!hits_right_paddle(&ball_at(785.0, 100.0), &paddle));
        assert!(!hits_right_paddle(&ball_at(750.0, 300.0), &paddle));
    }
}
