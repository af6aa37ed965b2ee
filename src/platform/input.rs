//! Keyboard and mouse state for the native window

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Keys for each direction: arrow first, then its WASD alias
const LEFT: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyA];
const RIGHT: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyD];
const UP: [KeyCode; 2] = [KeyCode::ArrowUp, KeyCode::KeyW];
const DOWN: [KeyCode; 2] = [KeyCode::ArrowDown, KeyCode::KeyS];

fn is_bound(code: KeyCode) -> bool {
    [LEFT, RIGHT, UP, DOWN].iter().any(|keys| keys.contains(&code))
}

/// Held keys, cursor and pending clicks between simulation ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Bound keys currently down; a direction is held while either of its
    /// keys is
    held: HashSet<KeyCode>,
    /// Last cursor position in game coordinates
    cursor: Option<Vec2>,
    /// Left press not yet seen by a tick
    pending_click: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press/release. Returns true if the key is bound.
    pub fn key(&mut self, code: KeyCode, state: ElementState) -> bool {
        if !is_bound(code) {
            return false;
        }
        if state.is_pressed() {
            self.held.insert(code);
        } else {
            self.held.remove(&code);
        }
        true
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.held.contains(k))
    }

    /// Record a cursor move given in physical surface pixels.
    ///
    /// `surface` is the current surface size in pixels and `game` the size of
    /// the game's coordinate space; the two differ on HiDPI displays.
    pub fn cursor_moved(&mut self, x: f64, y: f64, surface: (u32, u32), game: Vec2) {
        if surface.0 == 0 || surface.1 == 0 {
            return;
        }
        let scale = Vec2::new(game.x / surface.0 as f32, game.y / surface.1 as f32);
        self.cursor = Some(Vec2::new(x as f32, y as f32) * scale);
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Record a mouse button event; only left presses count as clicks
    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left && state.is_pressed() {
            if let Some(cursor) = self.cursor {
                self.pending_click = Some(cursor);
            }
        }
    }

    /// Release everything (window lost focus)
    pub fn clear(&mut self) {
        *self = Self {
            cursor: self.cursor,
            ..Self::default()
        };
    }

    /// Snapshot for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.any_held(&LEFT),
            right: self.any_held(&RIGHT),
            up: self.any_held(&UP),
            down: self.any_held(&DOWN),
            click: self.pending_click,
        }
    }

    /// Clear one-shot inputs after a tick processed them
    pub fn consume_one_shots(&mut self) {
        self.pending_click = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME: Vec2 = Vec2::new(800.0, 450.0);

    #[test]
    fn test_arrows_and_wasd() {
        let mut input = InputState::new();
        assert!(input.key(KeyCode::ArrowLeft, ElementState::Pressed));
        assert!(input.key(KeyCode::KeyW, ElementState::Pressed));
        assert!(!input.key(KeyCode::KeyQ, ElementState::Pressed));

        let tick = input.tick_input();
        assert!(tick.left && tick.up);
        assert!(!tick.right && !tick.down);

        input.key(KeyCode::KeyA, ElementState::Released);
        assert!(!input.tick_input().left);
    }

    #[test]
    fn test_releasing_alias_keeps_other_key_held() {
        let mut input = InputState::new();
        input.key(KeyCode::ArrowLeft, ElementState::Pressed);
        input.key(KeyCode::KeyA, ElementState::Pressed);
        input.key(KeyCode::KeyA, ElementState::Released);
        assert!(input.tick_input().left);

        input.key(KeyCode::ArrowLeft, ElementState::Released);
        assert!(!input.tick_input().left);

        // Same the other way round
        input.key(KeyCode::KeyD, ElementState::Pressed);
        input.key(KeyCode::ArrowRight, ElementState::Pressed);
        input.key(KeyCode::ArrowRight, ElementState::Released);
        assert!(input.tick_input().right);
    }

    #[test]
    fn test_click_is_one_shot() {
        let mut input = InputState::new();
        input.cursor_moved(400.0, 225.0, (800, 450), GAME);
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(input.tick_input().click, Some(Vec2::new(400.0, 225.0)));

        // Release does not click again
        input.mouse_button(MouseButton::Left, ElementState::Released);
        assert!(input.tick_input().click.is_some());

        input.consume_one_shots();
        assert_eq!(input.tick_input().click, None);
    }

    #[test]
    fn test_right_button_ignored() {
        let mut input = InputState::new();
        input.cursor_moved(10.0, 10.0, (800, 450), GAME);
        input.mouse_button(MouseButton::Right, ElementState::Pressed);
        assert_eq!(input.tick_input().click, None);
    }

    #[test]
    fn test_click_without_cursor_ignored() {
        let mut input = InputState::new();
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(input.tick_input().click, None);
    }

    #[test]
    fn test_hidpi_cursor_mapping() {
        let mut input = InputState::new();
        input.cursor_moved(800.0, 450.0, (1600, 900), GAME);
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(input.tick_input().click, Some(Vec2::new(400.0, 225.0)));
    }

    #[test]
    fn test_clear_keeps_cursor() {
        let mut input = InputState::new();
        input.key(KeyCode::ArrowRight, ElementState::Pressed);
        input.cursor_moved(1.0, 2.0, (800, 450), GAME);
        input.clear();
        assert_eq!(input.tick_input(), TickInput::default());

        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(input.tick_input().click, Some(Vec2::new(1.0, 2.0)));
    }
}
