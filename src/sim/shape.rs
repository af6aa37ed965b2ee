//! Shapes, colors and the positioned body that carries them
//!
//! A `Body` is a position plus a color plus a `Shape`. Circles are positioned
//! by their center, rectangles by their top-left corner.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Step used by the movement helpers when the caller has no preference
pub const DEFAULT_STEP: i32 = 10;

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const GREEN: Color = Color::rgb(0, 228, 48);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized components for vertex data
    pub fn to_array(self) -> [f32; 4] {
        let c = |v: u8| v as f32 / 255.0;
        [c(self.r), c(self.g), c(self.b), c(self.a)]
    }
}

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Point of the rectangle (edges included) closest to `p`
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }

    /// Inclusive on all edges
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.cmpge(self.min()).all() && p.cmple(self.max()).all()
    }
}

/// Per-shape attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: i32 },
    Rectangle { width: i32, height: i32 },
}

/// A colored shape at an integer position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub pos: IVec2,
    pub color: Color,
    pub shape: Shape,
}

impl Body {
    pub fn circle(x: i32, y: i32, radius: i32, color: Color) -> Self {
        Self {
            pos: IVec2::new(x, y),
            color,
            shape: Shape::Circle { radius },
        }
    }

    pub fn rectangle(x: i32, y: i32, width: i32, height: i32, color: Color) -> Self {
        Self {
            pos: IVec2::new(x, y),
            color,
            shape: Shape::Rectangle { width, height },
        }
    }

    /// Position as a float vector (the center, for circles)
    pub fn center(&self) -> Vec2 {
        self.pos.as_vec2()
    }

    /// Radius of a circle, 0 for other shapes
    pub fn radius(&self) -> i32 {
        match self.shape {
            Shape::Circle { radius } => radius,
            Shape::Rectangle { .. } => 0,
        }
    }

    /// Bounding rectangle (exact for rectangles)
    pub fn rect(&self) -> Rect {
        let p = self.pos.as_vec2();
        match self.shape {
            Shape::Circle { radius } => {
                let r = radius as f32;
                Rect::new(p.x - r, p.y - r, 2.0 * r, 2.0 * r)
            }
            Shape::Rectangle { width, height } => Rect::new(p.x, p.y, width as f32, height as f32),
        }
    }

    pub fn go_to(&mut self, x: i32, y: i32) {
        self.pos = IVec2::new(x, y);
    }

    pub fn move_x(&mut self, dx: i32) {
        self.go_to(self.pos.x + dx, self.pos.y);
    }

    pub fn move_y(&mut self, dy: i32) {
        self.go_to(self.pos.x, self.pos.y + dy);
    }

    pub fn move_right(&mut self, step: i32) {
        self.move_x(step);
    }

    pub fn move_left(&mut self, step: i32) {
        self.move_x(-step);
    }

    pub fn move_up(&mut self, step: i32) {
        self.move_y(-step);
    }

    pub fn move_down(&mut self, step: i32) {
        self.move_y(step);
    }
}
