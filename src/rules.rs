//! Data-driven match rules
//!
//! The defaults carry three quirks that are kept configurable rather than
//! silently corrected: the paddle bounce scales ball speed without reversing
//! it, the top/bottom bounce does not invert y-velocity, and ball speed is
//! uncapped. `Rules::classic()` selects the corrected behavior for all three.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Where the ball travels on a serve from center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServeDirection {
    /// Always the initial direction
    #[default]
    Fixed,
    /// Toward the side that just conceded the point
    TowardLoser,
    /// Flip direction on every serve
    Alternate,
    /// Seeded RNG draw per serve
    Random,
}

impl ServeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServeDirection::Fixed => "Fixed",
            ServeDirection::TowardLoser => "TowardLoser",
            ServeDirection::Alternate => "Alternate",
            ServeDirection::Random => "Random",
        }
    }
}

/// Match rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Points needed to win
    pub score_limit: u32,
    /// Paddle vertical displacement per frame of held input
    pub paddle_step: f32,
    /// Multiplier applied to x-velocity on every paddle hit
    pub paddle_bounce_multiplier: f32,
    /// Reverse x-direction on paddle hit (a real Pong bounce does; the
    /// default only scales speed)
    pub reverse_on_paddle_hit: bool,
    /// Invert y-velocity on top/bottom bounce (off by default: the bounce
    /// multiplies y by 1)
    pub invert_on_world_bounds: bool,
    /// Cap on ball speed after a paddle hit; None leaves growth unbounded
    pub max_ball_speed: Option<f32>,
    /// Serve direction policy
    pub serve_direction: ServeDirection,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            score_limit: SCORE_LIMIT,
            paddle_step: PADDLE_STEP,
            paddle_bounce_multiplier: PADDLE_BOUNCE_MULTIPLIER,
            reverse_on_paddle_hit: false,
            invert_on_world_bounds: false,
            max_ball_speed: None,
            serve_direction: ServeDirection::Fixed,
        }
    }
}

impl Rules {
    /// Corrected Pong behavior: real bounces, capped speed, serve toward the
    /// side that conceded
    pub fn classic() -> Self {
        Self {
            reverse_on_paddle_hit: true,
            invert_on_world_bounds: true,
            max_ball_speed: Some(900.0),
            serve_direction: ServeDirection::TowardLoser,
            ..Self::default()
        }
    }

    /// Sign applied to y-velocity on a top/bottom boundary event
    pub fn world_bounds_y_factor(&self) -> f32 {
        if self.invert_on_world_bounds { -1.0 } else { 1.0 }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preserves_quirks() {
        let rules = Rules::default();
        assert_eq!(rules.score_limit, 5);
        assert_eq!(rules.paddle_bounce_multiplier, 1.2);
        assert!(!rules.reverse_on_paddle_hit);
        assert!(!rules.invert_on_world_bounds);
        assert!(rules.max_ball_speed.is_none());
        assert_eq!(rules.serve_direction, ServeDirection::Fixed);
        assert_eq!(rules.world_bounds_y_factor(), 1.0);
    }

    #[test]
    fn test_classic_corrects_quirks() {
        let rules = Rules::classic();
        assert!(rules.reverse_on_paddle_hit);
        assert!(rules.invert_on_world_bounds);
        assert_eq!(rules.max_ball_speed, Some(900.0));
        assert_eq!(rules.world_bounds_y_factor(), -1.0);
    }

    #[test]
    fn test_json_round_trip() {
        let rules = Rules {
            score_limit: 11,
            serve_direction: ServeDirection::Alternate,
            ..Rules::classic()
        };
        let json = rules.to_json().unwrap();
        let parsed = Rules::from_json(&json).unwrap();
        assert_eq!(parsed, rules);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Rules::from_json("not json").is_err());
    }
}
