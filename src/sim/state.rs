//! Match state and core simulation types
//!
//! Everything the host must persist to freeze/restore a match lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::rules::Rules;

/// Top-level mode of the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Active gameplay
    InProgress,
    /// A side reached the score limit; simulation is suspended until reset
    GameOver,
}

/// One of the two competing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// A playfield edge the ball has reached, as reported by the host's
/// collision layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// A player's paddle
///
/// Horizontal position is fixed at construction; only `y` moves, and only in
/// response to that player's input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp vertical position into the playfield
    pub fn clamp_to(&mut self, playfield_height: f32) {
        self.y = self.y.clamp(0.0, playfield_height);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Advance position by one frame of velocity
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// RNG state wrapper for serialization
///
/// A fresh Pcg32 is derived per draw from seed + draw counter, so restoring
/// a serialized match replays the same serve directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// Draw one boolean, advancing the stream
    pub fn next_bool(&mut self) -> bool {
        let mut rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.draws));
        self.draws += 1;
        rng.random()
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Playfield bounds
    pub width: f32,
    pub height: f32,
    /// Match rules in force
    pub rules: Rules,
    /// RNG state (consumed only by the Random serve policy)
    pub rng_state: RngState,
    /// Current phase
    pub phase: MatchPhase,
    /// Points per side
    pub score_left: u32,
    pub score_right: u32,
    /// Declared winner, set the frame a score reaches the limit
    pub winner: Option<Side>,
    /// Serves performed since the last reset (drives the Alternate policy)
    pub serves: u32,
    /// Paddles
    pub paddle_left: Paddle,
    pub paddle_right: Paddle,
    /// The ball
    pub ball: Ball,
}

impl MatchState {
    /// Create a new match on the given playfield
    ///
    /// Paddles start vertically centered just inside their edges; the ball
    /// starts at a deterministic interior point with the initial velocity.
    pub fn new(width: f32, height: f32, rules: Rules, seed: u64) -> Self {
        Self {
            width,
            height,
            rules,
            rng_state: RngState::new(seed),
            phase: MatchPhase::InProgress,
            score_left: 0,
            score_right: 0,
            winner: None,
            serves: 0,
            paddle_left: Paddle::new(PADDLE_INSET, height / 2.0),
            paddle_right: Paddle::new(width - PADDLE_INSET, height / 2.0),
            ball: Ball {
                pos: Vec2::new(width / 3.0, height / 3.0),
                vel: Vec2::new(BALL_START_VX, BALL_START_VY),
            },
        }
    }

    /// Create a match on the default playfield with default rules
    pub fn with_defaults(seed: u64) -> Self {
        Self::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, Rules::default(), seed)
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.paddle_left,
            Side::Right => &self.paddle_right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.paddle_left,
            Side::Right => &mut self.paddle_right,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }
}
