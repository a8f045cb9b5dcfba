//! Duo Pong headless harness
//!
//! Stands in for a real rendering host: drives the simulator once per frame
//! with a trivial follow-the-ball input source, detects wall and paddle
//! contacts, and forwards them as boundary/paddle events. The simulator is
//! agnostic to where its input flags come from, so a bot works as well as a
//! keyboard.

use duo_pong::consts::*;
use duo_pong::sim::{
    Edge, FrameInput, MatchState, Side, boundary_event, paddle_collision, reset_match, tick,
};
use duo_pong::rules::Rules;

/// Frames before the harness gives up on a match
const MAX_FRAMES: u32 = 200_000;

fn main() {
    env_logger::init();
    log::info!("Duo Pong (headless) starting...");

    // Classic rules so the ball actually bounces; the default rules neither
    // invert on the walls nor reverse on the paddles, and this harness has
    // no physics engine to reflect the ball for it
    let mut state = MatchState::with_defaults(0xD00B);
    state.rules = Rules::classic();

    play_match(&mut state);

    let view = state.view();
    if let Some(banner) = &view.winner_banner {
        println!("{banner}  (final score {} - {})", view.score_left, view.score_right);
    } else {
        println!("Match abandoned after {MAX_FRAMES} frames");
    }

    // Exercise the restart flow the "Play Again" affordance triggers
    reset_match(&mut state);
    assert!(!state.is_over());
    log::info!("Ready for another match");
}

/// Run frames until someone wins or the frame budget runs out
fn play_match(state: &mut MatchState) {
    for _ in 0..MAX_FRAMES {
        if state.is_over() {
            return;
        }
        let input = follow_ball_input(state);
        tick(state, &input, SIM_DT);
        forward_collisions(state);
    }
}

/// Both bots chase the ball's y-coordinate
fn follow_ball_input(state: &MatchState) -> FrameInput {
    let target = state.ball.pos.y;
    let step = state.rules.paddle_step;
    FrameInput {
        left_up: target < state.paddle_left.y - step,
        left_down: target > state.paddle_left.y + step,
        right_up: target < state.paddle_right.y - step,
        right_down: target > state.paddle_right.y + step,
    }
}

/// The collision layer a physics engine would provide: report wall and
/// paddle contacts as semantic events, only while the ball moves into them
fn forward_collisions(state: &mut MatchState) {
    let ball = state.ball;
    if ball.pos.y < 0.0 && ball.vel.y < 0.0 {
        boundary_event(state, Edge::Top);
    } else if ball.pos.y > state.height && ball.vel.y > 0.0 {
        boundary_event(state, Edge::Bottom);
    }

    if overlaps_paddle(state, Side::Left) && ball.vel.x < 0.0 {
        paddle_collision(state, Side::Left);
    } else if overlaps_paddle(state, Side::Right) && ball.vel.x > 0.0 {
        paddle_collision(state, Side::Right);
    }
}

fn overlaps_paddle(state: &MatchState, side: Side) -> bool {
    let paddle = state.paddle(side);
    let ball = &state.ball;
    (ball.pos.x - paddle.x).abs() <= (PADDLE_WIDTH + BALL_SIZE) / 2.0
        && (ball.pos.y - paddle.y).abs() <= (PADDLE_HEIGHT + BALL_SIZE) / 2.0
}
