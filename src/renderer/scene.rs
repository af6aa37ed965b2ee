//! Per-frame scene building
//!
//! Turns a `GameState` into a triangle list in game coordinates.

use super::shapes;
use super::vertex::Vertex;
use crate::sim::{Body, GamePhase, GameState, Shape};
use crate::ui::GameOverScreen;

/// Segments used for circle tessellation
const CIRCLE_SEGMENTS: u32 = 32;

/// Vertices for a single body
pub fn body(body: &Body) -> Vec<Vertex> {
    let color = body.color.to_array();
    match body.shape {
        Shape::Circle { radius } => {
            shapes::circle(body.center(), radius as f32, color, CIRCLE_SEGMENTS)
        }
        Shape::Rectangle { .. } => shapes::rect(&body.rect(), color),
    }
}

/// Everything to draw this frame
pub fn build(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    match state.phase {
        GamePhase::Playing => {
            vertices.extend(body(&state.player.body));
            vertices.extend(body(&state.axe.body));
        }
        GamePhase::GameOver => {
            let screen = GameOverScreen::layout(&state.config);
            vertices.extend(shapes::text(&screen.title));
            vertices.extend(shapes::rect(
                &screen.restart.rect,
                screen.restart.color.to_array(),
            ));
            vertices.extend(shapes::text(&screen.restart.label));
        }
    }

    vertices
}
