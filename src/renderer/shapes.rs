//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in game coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::font::{GLYPH_WIDTH, glyph, row_runs};
use super::vertex::Vertex;
use crate::sim::Rect;
use crate::ui::{Label, font_pixel};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
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

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let min = rect.min();
    let max = rect.max();

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a line of bitmap text, one quad per horizontal run
/// of lit font pixels
pub fn text(label: &Label) -> Vec<Vertex> {
    let px = font_pixel(label.size);
    let color = label.color.to_array();
    let mut vertices = Vec::new();

    for (i, c) in label.text.chars().enumerate() {
        let origin_x = label.pos.x + (i * (GLYPH_WIDTH + 1)) as f32 * px;
        for (row, bits) in glyph(c).iter().enumerate() {
            let y = label.pos.y + row as f32 * px;
            for (start, len) in row_runs(*bits) {
                let run = Rect::new(origin_x + start as f32 * px, y, len as f32 * px, px);
                vertices.extend(rect(&run, color));
            }
        }
    }

    vertices
}
