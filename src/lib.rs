//! Duo Pong - a two-player Pong match simulator
//!
//! Core modules:
//! - `sim`: Deterministic match simulation (paddles, ball, scoring, win state)
//! - `rules`: Data-driven match rules (score limit, bounce behavior, serve policy)
//! - `view`: Host-facing render hints (positions, score strings, winner banner)
//!
//! The crate owns no rendering, input devices, or timing: an external host
//! samples its input devices once per frame, calls [`sim::tick`], forwards
//! collision notifications via [`sim::boundary_event`] and
//! [`sim::paddle_collision`], and draws whatever [`sim::MatchState::view`]
//! reports.

pub mod rules;
pub mod sim;
pub mod view;

pub use rules::{Rules, ServeDirection};
pub use sim::{MatchPhase, MatchState, Side};
pub use view::SceneView;

/// Game configuration constants
pub mod consts {
    /// Fixed per-frame timestep (host drives one update per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 1800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 1080.0;

    /// Paddle defaults - paddles sit just inside the left/right edges
    pub const PADDLE_INSET: f32 = 20.0;
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 250.0;
    /// Vertical displacement per frame while a direction key is held
    pub const PADDLE_STEP: f32 = 10.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 50.0;
    /// Initial velocity components at match start and on every serve
    pub const BALL_START_VX: f32 = 300.0;
    pub const BALL_START_VY: f32 = 300.0;

    /// Points needed to win the match
    pub const SCORE_LIMIT: u32 = 5;
    /// Speed boost when ball hits a paddle (multiplicative, uncapped)
    pub const PADDLE_BOUNCE_MULTIPLIER: f32 = 1.2;
}
