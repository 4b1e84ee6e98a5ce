//! Terminal input module.
//!
//! Maps `crossterm` key events onto the game's three logical keys and tracks
//! held state, including synthesized releases for terminals that never emit
//! key-release events.

pub mod handler;
pub mod map;

pub use handler::InputHandler;
pub use map::{map_key, should_quit, InputKey};
