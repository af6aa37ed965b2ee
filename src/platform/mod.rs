//! Platform abstraction layer
//!
//! Translates native window events into deterministic simulation input.

pub mod input;

pub use input::InputState;
