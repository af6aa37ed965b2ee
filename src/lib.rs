//! The Axe - dodge the bouncing axe
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, movement, collision, game state)
//! - `ui`: Game-over screen layout and the restart button
//! - `renderer`: wgpu triangle pipeline and scene tessellation
//! - `platform`: Native input translation
//! - `settings`: Serde-backed configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{GameConfig, Settings};

/// Game configuration constants
pub mod consts {
    /// Simulation steps per second (the game advances one step per frame)
    pub const TARGET_FPS: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Draw surface dimensions
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 450;
    pub const WINDOW_TITLE: &str = "The Axe";

    /// Player defaults (starts centered)
    pub const PLAYER_RADIUS: i32 = 10;
    pub const PLAYER_STEP: i32 = 10;

    /// Axe defaults
    pub const AXE_START_X: i32 = 300;
    pub const AXE_START_Y: i32 = 0;
    pub const AXE_WIDTH: i32 = 60;
    pub const AXE_HEIGHT: i32 = 90;
    pub const AXE_SPEED: i32 = 15;

    /// Restart button and game-over text
    pub const BUTTON_WIDTH: i32 = 120;
    pub const BUTTON_HEIGHT: i32 = 60;
    pub const FONT_SIZE: i32 = 20;
    pub const GAME_OVER_TEXT: &str = "Game over";
    pub const RESTART_TEXT: &str = "Play Again";
}
