//! Deterministic match simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame step only
//! - Seeded RNG only (and only for the Random serve policy)
//! - No rendering or platform dependencies
//!
//! The host invokes every entry point synchronously, once per frame, with no
//! overlap; nothing here locks, suspends, or spawns.

pub mod state;
pub mod tick;

pub use state::{Ball, Edge, MatchPhase, MatchState, Paddle, RngState, Side};
pub use tick::{FrameInput, boundary_event, check_winner, paddle_collision, reset_match, tick};
