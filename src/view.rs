//! Host-facing render hints
//!
//! The host draws from a [`SceneView`] snapshot each frame; the simulator
//! never renders anything itself. Score values arrive pre-formatted so the
//! host's text objects can display them verbatim.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{MatchPhase, MatchState, Side};

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneView {
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub ball_pos: Vec2,
    pub score_left: String,
    pub score_right: String,
    /// Winner banner text, present only while the match is over
    pub winner_banner: Option<String>,
    /// Whether the "Play Again" affordance should be visible and interactive
    pub play_again_visible: bool,
}

impl MatchState {
    /// Snapshot the current frame for rendering
    pub fn view(&self) -> SceneView {
        SceneView {
            paddle_left_y: self.paddle_left.y,
            paddle_right_y: self.paddle_right.y,
            ball_pos: self.ball.pos,
            score_left: self.score_left.to_string(),
            score_right: self.score_right.to_string(),
            winner_banner: self.winner.map(winner_banner),
            play_again_visible: self.phase == MatchPhase::GameOver,
        }
    }
}

fn winner_banner(winner: Side) -> String {
    format!("{} Player Wins!", winner.as_str())
}
