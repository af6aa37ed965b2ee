//! Game settings and tuning
//!
//! Read once at start-up from inline JSON in the `THE_AXE_SETTINGS`
//! environment variable. Every field is optional; missing ones keep their
//! defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation tuning (window geometry, sizes, speeds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Draw surface width in pixels
    pub window_width: i32,
    /// Draw surface height in pixels
    pub window_height: i32,
    pub player_radius: i32,
    /// Pixels moved per frame per held direction
    pub player_step: i32,
    pub axe_width: i32,
    pub axe_height: i32,
    /// Pixels the axe travels per frame
    pub axe_speed: i32,
    /// Simulation steps per second
    pub target_fps: u32,
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            player_radius: PLAYER_RADIUS,
            player_step: PLAYER_STEP,
            axe_width: AXE_WIDTH,
            axe_height: AXE_HEIGHT,
            axe_speed: AXE_SPEED,
            target_fps: TARGET_FPS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check that both entities fit inside the window and actually move
    pub fn validate(&self) -> Result<(), String> {
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(format!(
                "window must be non-empty, got {}x{}",
                self.window_width, self.window_height
            ));
        }
        if self.player_radius <= 0
            || 2 * self.player_radius > self.window_width
            || 2 * self.player_radius > self.window_height
        {
            return Err(format!(
                "player radius {} does not fit a {}x{} window",
                self.player_radius, self.window_width, self.window_height
            ));
        }
        if self.axe_width <= 0
            || self.axe_height <= 0
            || self.axe_width > self.window_width
            || self.axe_height >= self.window_height
        {
            return Err(format!(
                "axe {}x{} does not fit a {}x{} window",
                self.axe_width, self.axe_height, self.window_width, self.window_height
            ));
        }
        if self.player_step <= 0 || self.axe_speed <= 0 {
            return Err("player step and axe speed must be positive".to_string());
        }
        if self.target_fps == 0 {
            return Err("target fps must be positive".to_string());
        }
        Ok(())
    }

    /// Duration of one simulation step in seconds
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.target_fps as f32
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Present with vsync
    pub vsync: bool,
    /// Simulation tuning
    pub game: GameConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            vsync: true,
            game: GameConfig::default(),
        }
    }
}

impl Settings {
    /// Environment variable holding inline JSON settings
    pub const ENV_VAR: &'static str = "THE_AXE_SETTINGS";

    /// Parse settings from JSON and validate the game tuning
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: Settings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.game.validate()?;
        Ok(settings)
    }

    /// Load settings from the environment, falling back to defaults
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::ENV_VAR);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring invalid {}: {}", Self::ENV_VAR, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.title, "The Axe");
        assert_eq!(settings.game.window_width, 800);
        assert_eq!(settings.game.window_height, 450);
        assert!(settings.game.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"game": {"seed": 42, "axe_speed": 5}}"#).unwrap();
        assert_eq!(settings.game.seed, Some(42));
        assert_eq!(settings.game.axe_speed, 5);
        assert_eq!(settings.game.player_radius, PLAYER_RADIUS);
        assert_eq!(settings.title, WINDOW_TITLE);
        assert!(settings.vsync);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        assert!(Settings::from_json(r#"{"game": {"axe_height": 450}}"#).is_err());
        assert!(Settings::from_json(r#"{"game": {"player_radius": 300}}"#).is_err());
        assert!(Settings::from_json(r#"{"game": {"player_step": 0}}"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_sim_dt() {
        let config = GameConfig::default();
        assert!((config.sim_dt() - 1.0 / 60.0).abs() < 1e-6);
    }
}
