//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Playfield dimensions in field units.
///
/// All physics runs in field units; the terminal view scales them to cells.
pub const FIELD_WIDTH: f32 = 480.0;
pub const FIELD_HEIGHT: f32 = 320.0;

/// Frame timing (milliseconds)
pub const TICK_MS: u32 = 16;

/// Ball
pub const BALL_RADIUS: f32 = 8.0;
/// Initial speed per axis, applied up-left on launch.
pub const INITIAL_SPEED: f32 = 5.0;
/// Scaling factor from paddle-relative impact offset to horizontal speed.
pub const REFLECT_MULTIPLIER: f32 = 12.0;
/// Gap between a resting ball and the paddle's top edge.
pub const BALL_REST_GAP: f32 = 5.0;

/// Paddle
pub const PADDLE_WIDTH: f32 = 75.0;
pub const PADDLE_HEIGHT: f32 = 10.0;
pub const PADDLE_SPEED: f32 = 7.0;
pub const PADDLE_BOTTOM_MARGIN: f32 = 30.0;
pub const PADDLE_Y: f32 = FIELD_HEIGHT - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN;

/// Brick layout. Nine columns at most still fit the field width.
pub const BRICK_WIDTH: f32 = 50.0;
pub const BRICK_HEIGHT: f32 = 25.0;
pub const BRICK_PADDING: f32 = 3.0;
pub const BRICK_OFFSET_LEFT: f32 = 5.0;
pub const BRICK_OFFSET_TOP: f32 = 60.0;

/// Brick grid generation bounds (inclusive)
pub const MIN_ROWS: usize = 3;
pub const MAX_ROWS: usize = 7;
pub const MIN_COLS: usize = 4;
pub const MAX_COLS: usize = 9;
/// Chance that a generated cell holds a live brick.
pub const BRICK_ALIVE_PERCENT: u32 = 80;

/// Scoring
pub const POINTS_PER_BRICK: u32 = 100;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Edge-triggered game actions produced by input handling.
///
/// Paddle movement is flag-driven per frame and is not an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Action press before launch: release the ball into flight.
    Launch,
    /// Action release while the ball is caught: un-hold, force it upward.
    ReleaseHold,
}

/// Current state of the held movement/action keys, sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFlags {
    pub left: bool,
    pub right: bool,
    pub action: bool,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Ball crossed the floor.
    Over,
    /// Every brick destroyed.
    Clear,
}

impl SessionOutcome {
    /// Parse from the persisted string form
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "over" => Some(SessionOutcome::Over),
            "clear" => Some(SessionOutcome::Clear),
            _ => None,
        }
    }

    /// Convert to the persisted string form
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionOutcome::Over => "over",
            SessionOutcome::Clear => "clear",
        }
    }
}
