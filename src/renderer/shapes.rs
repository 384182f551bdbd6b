//! Shape generation for 2D primitives
//!
//! Pure functions from game state to triangle lists. The pipeline consumes
//! the vertices without knowing anything about the game.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};

/// Two triangles covering an axis-aligned rectangle (top-left + size)
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y1, color),
    ]
}

/// Triangle fan approximating a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Dashed net down the horizontal center: short segments at fixed
/// vertical intervals
pub fn net(color: [f32; 4]) -> Vec<Vertex> {
    let x = CANVAS_WIDTH / 2.0 - NET_SEGMENT_WIDTH / 2.0;
    let size = Vec2::new(NET_SEGMENT_WIDTH, NET_SEGMENT_HEIGHT);

    let mut vertices = Vec::new();
    let mut y = 0.0;
    while y <= CANVAS_HEIGHT {
        vertices.extend_from_slice(&rect(Vec2::new(x, y), size, color));
        y += NET_SEGMENT_SPACING;
    }
    vertices
}

/// Assemble the full frame for the current state
///
/// Over-phase frames are empty: the surface clears to the background and
/// the banner is a DOM overlay, not canvas geometry.
pub fn scene(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    if state.phase == GamePhase::Over {
        return Vec::new();
    }

    let paddle_color = if settings.high_contrast {
        colors::PADDLE_HIGH_CONTRAST
    } else {
        colors::PADDLE
    };

    let mut vertices = Vec::with_capacity(256);
    vertices.extend_from_slice(&rect(state.player.pos, state.player.size, paddle_color));
    vertices.extend_from_slice(&rect(state.ai.pos, state.ai.size, paddle_color));
    vertices.extend(circle(state.ball.pos, state.ball.radius, colors::BALL, 32));
    vertices.extend(net(colors::NET));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_spans_the_full_height() {
        // segments at y = 0, 30, ..., 600 inclusive
        let vertices = net(colors::NET);
        assert_eq!(vertices.len(), 21 * 6);
    }

    #[test]
    fn over_scene_is_empty() {
        let mut state = GameState::new();
        state.phase = GamePhase::Over;
        assert!(scene(&state, &Settings::default()).is_empty());
    }

    #[test]
    fn playing_scene_draws_paddles_ball_and_net() {
        let state = GameState::new();
        let vertices = scene(&state, &Settings::default());
        // two rects + 32-segment ball + 21 net dashes
        assert_eq!(vertices.len(), 2 * 6 + 32 * 3 + 21 * 6);
    }
}
