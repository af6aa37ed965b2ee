//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, integer positions
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod shape;
pub mod state;
pub mod tick;

pub use collision::{body_overlap, circle_rect_overlap, point_in_rect};
pub use shape::{Body, Color, DEFAULT_STEP, Rect, Shape};
pub use state::{Axe, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
