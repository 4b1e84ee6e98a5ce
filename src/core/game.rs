//! Game state module - the per-frame breakout state machine
//!
//! One `GameState` owns everything a frame touches: ball, paddle, brick grid,
//! score, and the sampled input flags. `step` advances the simulation exactly
//! one frame and reports a terminal outcome at most once per session.
//!
//! Collision convention: every check evaluates the ball's *next* position
//! `(x + dx, y + dy)` against the surface, so a collision reacts on the frame
//! before the ball would penetrate. Checks run sequentially and each sees the
//! velocity as adjusted by the checks before it.

use crate::core::grid::BrickGrid;
use crate::core::rng::SimpleRng;
use crate::types::{
    GameAction, InputFlags, SessionOutcome, BALL_RADIUS, BALL_REST_GAP, FIELD_HEIGHT, FIELD_WIDTH,
    INITIAL_SPEED, PADDLE_HEIGHT, PADDLE_SPEED, PADDLE_WIDTH, PADDLE_Y, POINTS_PER_BRICK,
    REFLECT_MULTIPLIER,
};

/// Where terminal transitions report: the store in the binary, a recorder in
/// tests. High scores are recorded the moment they are exceeded; the outcome
/// is recorded exactly once, on the terminal frame.
pub trait OutcomeSink {
    fn record_high_score(&mut self, high_score: u32);
    fn record_outcome(&mut self, last_score: u32, outcome: SessionOutcome);
}

/// The ball: position plus per-frame velocity, all in field units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

/// Ball lifecycle within a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Pinned to the paddle center, waiting for the action key.
    NotReleased,
    /// Normal physics.
    InFlight,
    /// Caught on the paddle; `offset` is the distance from the paddle's left
    /// edge, preserved until release.
    Held { offset: f32 },
    /// Ball crossed the floor. Latched.
    Over,
    /// Every brick destroyed. Latched.
    Cleared,
}

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub ball: Ball,
    pub paddle_x: f32,
    pub phase: Phase,
    pub score: u32,
    /// Monotonically non-decreasing, seeded from the persisted value.
    pub high_score: u32,
    pub flags: InputFlags,
    pub grid: BrickGrid,
}

impl GameState {
    /// Create a session with a freshly generated grid.
    pub fn new(seed: u32, high_score: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        Self::with_grid(BrickGrid::generate(&mut rng), high_score)
    }

    /// Create a session over a prebuilt grid.
    pub fn with_grid(grid: BrickGrid, high_score: u32) -> Self {
        let paddle_x = (FIELD_WIDTH - PADDLE_WIDTH) / 2.0;
        Self {
            ball: Ball {
                x: paddle_x + PADDLE_WIDTH / 2.0,
                y: PADDLE_Y - BALL_RADIUS - BALL_REST_GAP,
                dx: -INITIAL_SPEED,
                dy: -INITIAL_SPEED,
            },
            paddle_x,
            phase: Phase::NotReleased,
            score: 0,
            high_score,
            flags: InputFlags::default(),
            grid,
        }
    }

    /// Sample the held-key state for the coming frame.
    pub fn set_flags(&mut self, flags: InputFlags) {
        self.flags = flags;
    }

    /// The latched outcome, if the session has ended.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        match self.phase {
            Phase::Over => Some(SessionOutcome::Over),
            Phase::Cleared => Some(SessionOutcome::Clear),
            _ => None,
        }
    }

    /// Apply an edge-triggered action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Launch => {
                if matches!(self.phase, Phase::NotReleased) {
                    self.phase = Phase::InFlight;
                    true
                } else {
                    false
                }
            }
            GameAction::ReleaseHold => {
                if matches!(self.phase, Phase::Held { .. }) {
                    // Re-launch upward no matter what the caught velocity was.
                    self.ball.dy = -self.ball.dy.abs();
                    self.phase = Phase::InFlight;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Advance the simulation one frame.
    ///
    /// Returns the outcome on the terminal frame only; afterwards the state
    /// is latched and `step` is a no-op.
    pub fn step(&mut self, sink: &mut dyn OutcomeSink) -> Option<SessionOutcome> {
        if self.outcome().is_some() {
            return None;
        }

        self.move_paddle();

        match self.phase {
            Phase::NotReleased => {
                self.pin_to_paddle(PADDLE_WIDTH / 2.0);
                None
            }
            Phase::Held { offset } => {
                self.pin_to_paddle(offset);
                None
            }
            Phase::InFlight => self.fly(sink),
            Phase::Over | Phase::Cleared => None,
        }
    }

    fn move_paddle(&mut self) {
        if self.flags.right {
            self.paddle_x += PADDLE_SPEED;
        } else if self.flags.left {
            self.paddle_x -= PADDLE_SPEED;
        }
        self.paddle_x = self.paddle_x.clamp(0.0, FIELD_WIDTH - PADDLE_WIDTH);
    }

    fn pin_to_paddle(&mut self, offset: f32) {
        self.ball.x = self.paddle_x + offset;
        self.ball.y = PADDLE_Y - BALL_RADIUS - BALL_REST_GAP;
    }

    /// One frame of ball physics. Check order matters: walls and paddle
    /// adjust velocity, bricks score, the clear check runs before the floor
    /// check so a simultaneous clear-and-drop frame counts as a clear.
    fn fly(&mut self, sink: &mut dyn OutcomeSink) -> Option<SessionOutcome> {
        // Side walls.
        let next_x = self.ball.x + self.ball.dx;
        if next_x < BALL_RADIUS || next_x > FIELD_WIDTH - BALL_RADIUS {
            self.ball.dx = -self.ball.dx;
        }

        // Ceiling.
        if self.ball.y + self.ball.dy < BALL_RADIUS {
            self.ball.dy = -self.ball.dy;
        }

        // Paddle band.
        let next_x = self.ball.x + self.ball.dx;
        let next_y = self.ball.y + self.ball.dy;
        if next_y > PADDLE_Y - BALL_RADIUS
            && next_y < PADDLE_Y + PADDLE_HEIGHT
            && next_x > self.paddle_x
            && next_x < self.paddle_x + PADDLE_WIDTH
        {
            if self.flags.action && self.ball.dy > 0.0 {
                // Catch: freeze at the impact offset and end the frame.
                let offset = next_x - self.paddle_x;
                self.phase = Phase::Held { offset };
                self.pin_to_paddle(offset);
                return None;
            }
            self.ball.dy = -self.ball.dy;
            let hit = (next_x - self.paddle_x) / PADDLE_WIDTH - 0.5;
            self.ball.dx = hit * REFLECT_MULTIPLIER;
        }

        // Bricks. Each hit flips the vertical velocity once.
        let hits = self
            .grid
            .destroy_hits(self.ball.x + self.ball.dx, self.ball.y + self.ball.dy);
        if hits > 0 {
            for _ in 0..hits {
                self.ball.dy = -self.ball.dy;
            }
            self.score += hits as u32 * POINTS_PER_BRICK;
            if self.score > self.high_score {
                self.high_score = self.score;
                sink.record_high_score(self.high_score);
            }
        }

        if self.grid.all_cleared() {
            self.phase = Phase::Cleared;
            sink.record_outcome(self.score, SessionOutcome::Clear);
            return Some(SessionOutcome::Clear);
        }

        // Floor.
        if self.ball.y + self.ball.dy > FIELD_HEIGHT - BALL_RADIUS {
            self.phase = Phase::Over;
            sink.record_outcome(self.score, SessionOutcome::Over);
            return Some(SessionOutcome::Over);
        }

        self.ball.x += self.ball.dx;
        self.ball.y += self.ball.dy;
        None
    }
}

/// Sink that drops everything. Useful for benches and throwaway sessions.
#[derive(Debug, Default)]
pub struct NullSink;

impl OutcomeSink for NullSink {
    fn record_high_score(&mut self, _high_score: u32) {}
    fn record_outcome(&mut self, _last_score: u32, _outcome: SessionOutcome) {}
}
