//! Fixed-step simulation advance
//!
//! [`advance`] is the single per-tick entry point. It has no notion of
//! wall-clock time: each call moves the world exactly one logical step, and
//! the external scheduler owns the invocation cadence.

use super::collision::{BorderContact, resolve_collisions};
use super::state::{GamePhase, GameState};

/// Input intents for a single tick, produced by the external input layer.
///
/// The caller holds one pending slot, last write wins; intents are applied
/// at the start of the tick, never mid-tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Toggle between Playing and Paused
    pub pause: bool,
    /// Continue after a lost life
    pub resume: bool,
    /// Signed horizontal paddle movement for this tick
    pub paddle_delta: f32,
}

/// Advance the game by exactly one logical step.
///
/// Safe to call in any phase: terminal phases ignore every intent and leave
/// the state untouched, so callers need no defensive branching. A pause
/// toggle or a life-loss resume consumes its tick; simulation restarts on
/// the following call.
pub fn advance(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::GameOver | GamePhase::Complete => return,
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
                log::debug!("resumed from pause");
            }
            return;
        }
        GamePhase::LifeLost => {
            if input.resume {
                state.reset_ball();
                state.reset_paddle();
                state.phase = GamePhase::Playing;
                log::debug!("continuing with {} lives", state.lives);
            }
            return;
        }
        GamePhase::Playing => {}
    }

    if input.pause {
        state.phase = GamePhase::Paused;
        log::debug!("paused");
        return;
    }

    state.paddle.move_by(input.paddle_delta, &state.arena);

    state.ball.pos += state.ball.vel;

    let border = resolve_collisions(state);

    // The win check runs before the bottom-border check: clearing the last
    // brick on the tick the ball also exits still wins the game.
    if state.destroyed_count == state.grid.total() {
        state.phase = GamePhase::Complete;
        log::info!("game complete, score {}", state.score);
        return;
    }

    if border == BorderContact::Bottom {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("game over, score {}", state.score);
        } else {
            state.phase = GamePhase::LifeLost;
            log::debug!("life lost, {} remaining", state.lives);
        }
    }
}
