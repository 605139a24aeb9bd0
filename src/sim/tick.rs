//! Fixed timestep simulation tick
//!
//! Advances the game by exactly one frame. Order matters and is fixed:
//! paddles, ball motion, paddle collision, scoring.

use super::collision::{paddle_hit, scoring_side};
use super::state::{GameEvent, GameState, Side};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left paddle up (Q)
    pub left_up: bool,
    /// Left paddle down (Z)
    pub left_down: bool,
    /// Right paddle up (P)
    pub right_up: bool,
    /// Right paddle down (period)
    pub right_down: bool,
    /// Close requested; the current tick still runs to completion
    pub quit: bool,
}

/// Advance the game state by one tick, returning what happened in order
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Held keys apply every tick; up is applied before down
    let left_speed = state.left_paddle.speed;
    if input.left_up {
        state.move_paddle(Side::Left, -left_speed);
    }
    if input.left_down {
        state.move_paddle(Side::Left, left_speed);
    }
    let right_speed = state.right_paddle.speed;
    if input.right_up {
        state.move_paddle(Side::Right, -right_speed);
    }
    if input.right_down {
        state.move_paddle(Side::Right, right_speed);
    }

    let field = state.field;
    if state.ball.advance(&field) {
        events.push(GameEvent::WallBounce);
    }

    // No separation is applied, so an overlapping ball flips again next tick
    if let Some(side) = paddle_hit(&state.ball, &state.left_paddle, &state.right_paddle) {
        state.ball.bounce_horizontal();
        log::trace!("tick {}: ball hit {} paddle", state.time_ticks, side.as_str());
        events.push(GameEvent::PaddleBounce { side });
    }

    if let Some(side) = scoring_side(&state.ball, &field) {
        state.score.award(side);
        state.reset_ball();
        log::debug!(
            "tick {}: point to {} ({} - {})",
            state.time_ticks,
            side.as_str(),
            state.score.left,
            state.score.right
        );
        events.push(GameEvent::Scored {
            side,
            score: state.score,
        });
    }

    events
}
