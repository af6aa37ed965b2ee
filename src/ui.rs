//! Game-over screen layout
//!
//! Pure geometry so the simulation can hit-test the restart button and the
//! renderer can draw the same layout.

use glam::Vec2;

use crate::consts::*;
use crate::renderer::font::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::settings::GameConfig;
use crate::sim::collision::point_in_rect;
use crate::sim::shape::{Color, Rect};

/// Columns taken by one character: the glyph plus a one-pixel gap
const GLYPH_ADVANCE: i32 = GLYPH_WIDTH as i32 + 1;

/// Size of one font pixel for a given font size
pub fn font_pixel(font_size: i32) -> f32 {
    font_size as f32 / 10.0
}

/// Width in screen pixels of `text` drawn at `font_size`
pub fn measure_text(text: &str, font_size: i32) -> f32 {
    let chars = text.chars().count() as i32;
    if chars == 0 {
        return 0.0;
    }
    // Last glyph has no trailing gap
    (chars * GLYPH_ADVANCE - 1) as f32 * font_pixel(font_size)
}

/// Height in screen pixels of a line drawn at `font_size`
pub fn text_height(font_size: i32) -> f32 {
    GLYPH_HEIGHT as f32 * font_pixel(font_size)
}

/// A text label anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub pos: Vec2,
    pub size: i32,
    pub color: Color,
}

/// A clickable rectangle with a centered label
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub color: Color,
    pub label: Label,
}

impl Button {
    pub fn new(rect: Rect, color: Color, text: &'static str, text_color: Color) -> Self {
        let label_pos = Vec2::new(
            rect.pos.x + rect.size.x / 2.0 - measure_text(text, FONT_SIZE) / 2.0,
            rect.pos.y + rect.size.y / 2.0 - text_height(FONT_SIZE) / 2.0,
        );
        Self {
            rect,
            color,
            label: Label {
                text,
                pos: label_pos,
                size: FONT_SIZE,
                color: text_color,
            },
        }
    }

    /// A press at `click` lands on this button
    pub fn is_clicked(&self, click: Option<Vec2>) -> bool {
        click.is_some_and(|p| point_in_rect(p, &self.rect))
    }
}

/// Everything drawn while the game is over
#[derive(Debug, Clone, PartialEq)]
pub struct GameOverScreen {
    pub title: Label,
    pub restart: Button,
}

impl GameOverScreen {
    /// Lay out the screen around the window center
    pub fn layout(config: &GameConfig) -> Self {
        let cx = (config.window_width / 2) as f32;
        let cy = (config.window_height / 2) as f32;

        let restart = Button::new(
            Rect::new(
                cx - (BUTTON_WIDTH / 2) as f32,
                cy - (BUTTON_HEIGHT / 2) as f32,
                BUTTON_WIDTH as f32,
                BUTTON_HEIGHT as f32,
            ),
            Color::GREEN,
            RESTART_TEXT,
            Color::WHITE,
        );

        Self {
            title: Label {
                text: GAME_OVER_TEXT,
                pos: Vec2::new(cx - 50.0, cy - 100.0),
                size: FONT_SIZE,
                color: Color::RED,
            },
            restart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_text() {
        assert_eq!(measure_text("", 20), 0.0);
        // One glyph is 5 font pixels wide
        assert_eq!(measure_text("A", 20), 10.0);
        // "Play Again": 10 glyphs, 59 columns
        assert_eq!(measure_text("Play Again", 20), 118.0);
    }

    #[test]
    fn test_default_layout() {
        let screen = GameOverScreen::layout(&GameConfig::default());
        assert_eq!(screen.restart.rect, Rect::new(340.0, 195.0, 120.0, 60.0));
        assert_eq!(screen.title.pos, Vec2::new(350.0, 125.0));
        assert_eq!(screen.title.text, "Game over");
    }

    #[test]
    fn test_label_centered_in_button() {
        let screen = GameOverScreen::layout(&GameConfig::default());
        let button = &screen.restart;
        let label = &button.label;
        let width = measure_text(label.text, label.size);
        let height = text_height(label.size);
        let label_center = label.pos + Vec2::new(width, height) / 2.0;
        assert!((label_center - button.rect.center()).length() < 1e-3);
    }

    #[test]
    fn test_button_clicks() {
        let screen = GameOverScreen::layout(&GameConfig::default());
        assert!(screen.restart.is_clicked(Some(Vec2::new(400.0, 225.0))));
        assert!(screen.restart.is_clicked(Some(Vec2::new(340.0, 195.0))));
        assert!(!screen.restart.is_clicked(Some(Vec2::new(339.0, 225.0))));
        assert!(!screen.restart.is_clicked(None));
    }
}
