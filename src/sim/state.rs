//! Game state and entities
//!
//! Nothing here is persisted; the whole state is rebuilt from `GameConfig`
//! and a seed.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::body_overlap;
use super::shape::{Body, Color, Rect};
use crate::consts::{AXE_START_X, AXE_START_Y};
use crate::settings::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Player dodging, axe moving
    Playing,
    /// Player was hit; waiting for the restart button
    GameOver,
}

/// The player's circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub body: Body,
}

impl Player {
    /// Centered in the window
    pub fn new(config: &GameConfig) -> Self {
        Self {
            body: Body::circle(
                config.window_width / 2,
                config.window_height / 2,
                config.player_radius,
                Color::GREEN,
            ),
        }
    }

    pub fn pos(&self) -> IVec2 {
        self.body.pos
    }

    pub fn radius(&self) -> i32 {
        self.body.radius()
    }

    /// Move back to the window center
    pub fn recenter(&mut self, config: &GameConfig) {
        self.body
            .go_to(config.window_width / 2, config.window_height / 2);
    }

    /// Room left before the circle touches the right edge
    fn room_right(&self, config: &GameConfig) -> i32 {
        config.window_width - (self.body.pos.x + self.radius())
    }

    fn room_left(&self) -> i32 {
        self.body.pos.x - self.radius()
    }

    fn room_up(&self) -> i32 {
        self.body.pos.y - self.radius()
    }

    fn room_down(&self, config: &GameConfig) -> i32 {
        config.window_height - (self.body.pos.y + self.radius())
    }

    pub fn move_right(&mut self, config: &GameConfig) {
        let room = self.room_right(config);
        if room > 0 {
            self.body.move_right(config.player_step.min(room));
        }
    }

    pub fn move_left(&mut self, config: &GameConfig) {
        let room = self.room_left();
        if room > 0 {
            self.body.move_left(config.player_step.min(room));
        }
    }

    pub fn move_up(&mut self, config: &GameConfig) {
        let room = self.room_up();
        if room > 0 {
            self.body.move_up(config.player_step.min(room));
        }
    }

    pub fn move_down(&mut self, config: &GameConfig) {
        let room = self.room_down(config);
        if room > 0 {
            self.body.move_down(config.player_step.min(room));
        }
    }

    /// Whole circle lies inside the window
    pub fn in_bounds(&self, config: &GameConfig) -> bool {
        self.room_left() >= 0
            && self.room_up() >= 0
            && self.room_right(config) >= 0
            && self.room_down(config) >= 0
    }
}

/// The bouncing axe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axe {
    pub body: Body,
    /// Signed vertical step per frame (positive = down)
    pub direction: i32,
    width: i32,
    height: i32,
}

impl Axe {
    pub fn new(config: &GameConfig) -> Self {
        let x = AXE_START_X.min(config.window_width - config.axe_width);
        Self {
            body: Body::rectangle(
                x,
                AXE_START_Y,
                config.axe_width,
                config.axe_height,
                Color::RED,
            ),
            direction: config.axe_speed,
            width: config.axe_width,
            height: config.axe_height,
        }
    }

    pub fn pos(&self) -> IVec2 {
        self.body.pos
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Lowest allowed top edge
    fn max_y(&self, config: &GameConfig) -> i32 {
        config.window_height - self.height()
    }

    /// Advance one step in the current direction
    pub fn fall(&mut self) {
        self.body.move_y(self.direction);
    }

    pub fn set_direction(&mut self, direction: i32) {
        self.direction = direction;
    }

    /// Pick a new column, uniformly over the positions that keep the axe on
    /// screen
    fn relocate(&mut self, rng: &mut Pcg32, config: &GameConfig) {
        let max_x = (config.window_width - self.width()).max(0);
        self.body.pos.x = rng.random_range(0..=max_x);
    }

    /// Bounce off a vertical edge: flip direction, clamp back into range and
    /// relocate horizontally
    pub fn reverse(&mut self, rng: &mut Pcg32, config: &GameConfig) {
        self.body.pos.y = self.body.pos.y.clamp(0, self.max_y(config));
        self.direction = -self.direction;
        self.relocate(rng, config);
    }

    /// Fall one step and bounce if an edge was reached.
    /// Returns true if the axe bounced.
    pub fn advance(&mut self, rng: &mut Pcg32, config: &GameConfig) -> bool {
        self.fall();
        let y = self.body.pos.y;
        if y <= 0 || y >= self.max_y(config) {
            self.reverse(rng, config);
            return true;
        }
        false
    }

    /// Restart position: a random column, one axe-height below the top,
    /// heading down
    pub fn reset(&mut self, rng: &mut Pcg32, config: &GameConfig) {
        self.relocate(rng, config);
        self.body.pos.y = self.height().min(self.max_y(config));
        self.set_direction(config.axe_speed);
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Tuning the state was built from
    pub config: GameConfig,
    pub phase: GamePhase,
    pub player: Player,
    pub axe: Axe,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Completed runs (game overs) since start
    pub runs: u32,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            seed,
            config,
            phase: GamePhase::Playing,
            player: Player::new(&config),
            axe: Axe::new(&config),
            time_ticks: 0,
            runs: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Player circle overlaps the axe
    pub fn player_hit(&self) -> bool {
        body_overlap(&self.player.body, &self.axe.body)
    }

    /// Move the axe one step, bouncing with the state's RNG
    pub fn advance_axe(&mut self) -> bool {
        self.axe.advance(&mut self.rng, &self.config)
    }

    /// Put the axe back at a random column, recenter the player and clear
    /// game over
    pub fn reset(&mut self) {
        self.axe.reset(&mut self.rng, &self.config);
        self.player.recenter(&self.config);
        self.phase = GamePhase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(config(), 7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos(), IVec2::new(400, 225));
        assert_eq!(state.player.radius(), 10);
        assert_eq!(state.axe.pos(), IVec2::new(300, 0));
        assert_eq!(state.axe.direction, 15);
        assert!(!state.player_hit());
    }

    #[test]
    fn test_player_stops_at_edges() {
        let config = config();
        let mut player = Player::new(&config);

        for _ in 0..100 {
            player.move_right(&config);
            player.move_down(&config);
        }
        assert_eq!(player.pos(), IVec2::new(790, 440));

        for _ in 0..100 {
            player.move_left(&config);
            player.move_up(&config);
        }
        assert_eq!(player.pos(), IVec2::new(10, 10));
        assert!(player.in_bounds(&config));
    }

    #[test]
    fn test_player_step_shortened_near_edge() {
        let config = config();
        let mut player = Player::new(&config);
        player.body.go_to(15, 100);

        player.move_left(&config);
        assert_eq!(player.pos().x, 10);
        player.move_left(&config);
        assert_eq!(player.pos().x, 10);
    }

    #[test]
    fn test_axe_flips_at_bottom() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut axe = Axe::new(&config);
        axe.body.pos.y = 345;

        // 345 + 15 = 360 = 450 - 90: bottom edge reached
        assert!(axe.advance(&mut rng, &config));
        assert_eq!(axe.pos().y, 360);
        assert_eq!(axe.direction, -15);
        assert!(axe.pos().x >= 0 && axe.pos().x <= 740);
    }

    #[test]
    fn test_axe_no_flip_before_edge() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut axe = Axe::new(&config);
        axe.body.pos.y = 330;

        assert!(!axe.advance(&mut rng, &config));
        assert_eq!(axe.pos(), IVec2::new(300, 345));
        assert_eq!(axe.direction, 15);
    }

    #[test]
    fn test_axe_size_follows_config() {
        let config = GameConfig {
            axe_width: 100,
            axe_height: 50,
            ..GameConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        let mut axe = Axe::new(&config);
        assert_eq!((axe.width(), axe.height()), (100, 50));
        assert_eq!(axe.rect().size, glam::Vec2::new(100.0, 50.0));

        // 385 + 15 = 400 = 450 - 50
        axe.body.pos.y = 385;
        assert!(axe.advance(&mut rng, &config));
        assert_eq!(axe.pos().y, 400);
        assert!(axe.pos().x <= 700);
    }

    #[test]
    fn test_axe_clamped_when_overshooting() {
        let config = GameConfig {
            axe_speed: 100,
            ..GameConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let mut axe = Axe::new(&config);
        axe.body.pos.y = 50;
        axe.set_direction(-100);

        assert!(axe.advance(&mut rng, &config));
        assert_eq!(axe.pos().y, 0);
        assert_eq!(axe.direction, 100);
    }

    #[test]
    fn test_reset_clears_game_over() {
        let mut state = GameState::new(config(), 99);
        state.phase = GamePhase::GameOver;
        state.player.body.go_to(12, 34);
        state.axe.set_direction(-15);

        state.reset();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos(), IVec2::new(400, 225));
        assert_eq!(state.axe.pos().y, 90);
        assert_eq!(state.axe.direction, 15);
        assert!(state.axe.pos().x >= 0 && state.axe.pos().x <= 740);
        assert!(!state.player_hit());
    }
}
