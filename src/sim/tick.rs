//! Per-frame match update
//!
//! Core loop that advances the match deterministically. The host calls
//! [`tick`] once per rendered frame and forwards collision facts from its
//! physics layer through [`boundary_event`] and [`paddle_collision`].

use glam::Vec2;

use super::state::{Edge, MatchPhase, MatchState, Side};
use crate::consts::*;
use crate::rules::ServeDirection;

/// Input snapshot for a single frame (deterministic)
///
/// One flag per control: W/S for the left paddle, arrow up/down for the
/// right paddle in the reference host. The simulator only sees booleans and
/// is agnostic to the device behind them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// Advance the match by one frame
///
/// No-op while the match is over; reset resumes play.
pub fn tick(state: &mut MatchState, input: &FrameInput, dt: f32) {
    if state.phase == MatchPhase::GameOver {
        return;
    }

    // Pull paddles back in bounds before applying input; restored or
    // host-written state may arrive outside the playfield
    let height = state.height;
    state.paddle_left.clamp_to(height);
    state.paddle_right.clamp_to(height);

    // "up" wins when both directions are held
    let step = state.rules.paddle_step;
    if input.right_up {
        state.paddle_right.y -= step;
    } else if input.right_down {
        state.paddle_right.y += step;
    }
    if input.left_up {
        state.paddle_left.y -= step;
    } else if input.left_down {
        state.paddle_left.y += step;
    }
    state.paddle_left.clamp_to(height);
    state.paddle_right.clamp_to(height);

    state.ball.integrate(dt);

    // Ball past a scoring edge awards the point to the opposite side
    if state.ball.pos.x < 0.0 {
        award_point(state, Side::Right);
    } else if state.ball.pos.x > state.width {
        award_point(state, Side::Left);
    }
}

/// Host notification that the ball reached a playfield edge
///
/// Top/bottom is a physical bounce; left/right is a scoring edge, with the
/// same effect as the edge check inside [`tick`].
pub fn boundary_event(state: &mut MatchState, edge: Edge) {
    if state.phase == MatchPhase::GameOver {
        return;
    }

    match edge {
        Edge::Top | Edge::Bottom => {
            state.ball.vel.y *= state.rules.world_bounds_y_factor();
        }
        Edge::Left => award_point(state, Side::Right),
        Edge::Right => award_point(state, Side::Left),
    }
}

/// Host notification that the ball struck a paddle
pub fn paddle_collision(state: &mut MatchState, side: Side) {
    if state.phase == MatchPhase::GameOver {
        return;
    }

    let mut vx = state.ball.vel.x * state.rules.paddle_bounce_multiplier;
    if state.rules.reverse_on_paddle_hit {
        vx = -vx;
    }
    state.ball.vel.x = vx;

    if let Some(max_speed) = state.rules.max_ball_speed {
        let speed = state.ball.speed();
        if speed > max_speed {
            state.ball.vel *= max_speed / speed;
        }
    }

    log::debug!(
        "{} paddle hit, ball velocity now ({:.1}, {:.1})",
        side.as_str(),
        state.ball.vel.x,
        state.ball.vel.y
    );
}

/// Restart the match: scores zeroed, winner cleared, paddles re-centered,
/// ball served from center. Idempotent.
pub fn reset_match(state: &mut MatchState) {
    state.score_left = 0;
    state.score_right = 0;
    state.winner = None;
    state.phase = MatchPhase::InProgress;
    state.serves = 0;

    let center_y = state.height / 2.0;
    state.paddle_left.y = center_y;
    state.paddle_right.y = center_y;

    serve(state, None);
    log::info!("Match reset");
}

/// Score one point for `scorer`, then either declare the winner or serve
/// the next rally
fn award_point(state: &mut MatchState, scorer: Side) {
    match scorer {
        Side::Left => state.score_left += 1,
        Side::Right => state.score_right += 1,
    }
    log::info!(
        "{} scores: {} - {}",
        scorer.as_str(),
        state.score_left,
        state.score_right
    );

    if check_winner(state) {
        return;
    }
    serve(state, Some(scorer.opponent()));
}

/// Declare a winner the first time either score reaches the limit
///
/// Returns true once the match is over; the winner banner and play-again
/// affordance become visible through the scene view.
pub fn check_winner(state: &mut MatchState) -> bool {
    if state.phase == MatchPhase::GameOver {
        return true;
    }

    let limit = state.rules.score_limit;
    let winner = if state.score_left >= limit {
        Side::Left
    } else if state.score_right >= limit {
        Side::Right
    } else {
        return false;
    };

    state.winner = Some(winner);
    state.phase = MatchPhase::GameOver;
    log::info!("{} player wins the match", winner.as_str());
    true
}

/// Place the ball at playfield center and assign the serve velocity
///
/// `conceder` is the side that just lost the rally, when there is one;
/// only the TowardLoser policy looks at it.
fn serve(state: &mut MatchState, conceder: Option<Side>) {
    let sign = match state.rules.serve_direction {
        ServeDirection::Fixed => 1.0,
        ServeDirection::TowardLoser => match conceder {
            Some(Side::Left) => -1.0,
            _ => 1.0,
        },
        ServeDirection::Alternate => {
            if state.serves % 2 == 0 {
                1.0
            } else {
                -1.0
            }
        }
        ServeDirection::Random => {
            if state.rng_state.next_bool() {
                1.0
            } else {
                -1.0
            }
        }
    };

    state.ball.pos = Vec2::new(state.width / 2.0, state.height / 2.0);
    state.ball.vel = Vec2::new(sign * BALL_START_VX, BALL_START_VY);
    state.serves += 1;
}
