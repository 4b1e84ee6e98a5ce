//! Core game logic - pure, deterministic, and testable
//!
//! No I/O and no terminal dependencies live here. Same seed, same session.

pub mod game;
pub mod grid;
pub mod rng;

pub use game::{Ball, GameState, NullSink, OutcomeSink, Phase};
pub use grid::{Brick, BrickGrid, Rect};
pub use rng::SimpleRng;
