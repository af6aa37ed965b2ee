//! Fixed timestep simulation tick
//!
//! One tick is one frame of the game: overlap test, then movement while
//! playing, or restart handling while game over.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use crate::ui::GameOverScreen;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Left mouse button pressed this frame, at this game-space position
    pub click: Option<Vec2>,
}

/// Advance the game by one fixed timestep, returning the next state
pub fn tick(mut state: GameState, input: &TickInput) -> GameState {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Playing => {
            if state.player_hit() {
                state.phase = GamePhase::GameOver;
                state.runs += 1;
                log::info!(
                    "Game over after {} ticks (run {})",
                    state.time_ticks,
                    state.runs
                );
                return state;
            }

            let config = state.config;
            if input.right {
                state.player.move_right(&config);
            }
            if input.left {
                state.player.move_left(&config);
            }
            if input.up {
                state.player.move_up(&config);
            }
            if input.down {
                state.player.move_down(&config);
            }

            if state.advance_axe() {
                let heading = if state.axe.direction > 0 { "down" } else { "up" };
                log::debug!("Axe bounced, now at x={} heading {}", state.axe.pos().x, heading);
            }
        }
        GamePhase::GameOver => {
            let screen = GameOverScreen::layout(&state.config);
            if screen.restart.is_clicked(input.click) {
                state.reset();
                log::info!("Restarted");
            }
        }
    }

    state
}
