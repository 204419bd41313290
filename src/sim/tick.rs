//! Per-frame simulation tick
//!
//! Physics integrates once per invocation, not per wall-clock delta: the
//! host scheduler's refresh cadence sets the observed game speed. That
//! coupling is inherited behavior and kept on purpose.

use super::state::{MatchEvent, MatchState, Side};

/// Advance the match by one frame: move both paddles and the ball, then
/// evaluate the goal lines. Returns the round result when a side is beaten;
/// the match has already been reset for the next serve by the time this
/// returns.
pub fn tick(state: &mut MatchState) -> Option<MatchEvent> {
    let height = state.surface.y;
    state.left.advance(height);
    state.right.advance(height);
    state.ball.advance(height);
    evaluate_goal_lines(state)
}

/// Check the left and right goal lines. A covered goal line reflects the
/// ball with the paddle's bias; an uncovered one ends the round.
fn evaluate_goal_lines(state: &mut MatchState) -> Option<MatchEvent> {
    let ball_pos = state.ball.position();
    if ball_pos.x < state.tuning.goal_margin {
        match state.left.contains_y(ball_pos.y) {
            Some(bias) => {
                state.ball.reflect(bias);
                None
            }
            None => Some(round_lost(state, Side::Left, ball_pos.y)),
        }
    } else if ball_pos.x > state.surface.x {
        match state.right.contains_y(ball_pos.y) {
            Some(bias) => {
                state.ball.reflect(bias);
                None
            }
            None => Some(round_lost(state, Side::Right, ball_pos.y)),
        }
    } else {
        None
    }
}

/// A side let the ball past: reset for the next serve and credit the
/// opponent
fn round_lost(state: &mut MatchState, beaten: Side, ball_y: f32) -> MatchEvent {
    log::debug!("{beaten:?} side missed at y={ball_y:.1}");
    state.reset();
    MatchEvent::RoundWon(beaten.opponent())
}
