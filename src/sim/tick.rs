//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one step. There is no `dt`: the
//! ball moves by its velocity once per tick, so the host's scheduler sets
//! the game speed.

use super::collision::{hits_paddle, hits_side_wall, reflect_x, reflect_y, scoring_lines_reached};
use super::state::{GameEvent, GameState, Side};
use crate::settings::ArenaConfig;

/// Advance the game state by one fixed step
///
/// Order matters and is part of the game's behavior: boundary scoring and
/// paddle bounces are both evaluated on the same tick, so a ball scoring
/// while inside a paddle's band has its vertical velocity flipped twice.
pub fn tick(state: &mut GameState, arena: &ArenaConfig) {
    state.events.clear();

    if state.game_over {
        return;
    }

    state.time_ticks += 1;

    // Integrate
    state.ball.pos += state.ball.vel;

    // Side walls
    if hits_side_wall(state.ball.pos, arena) {
        reflect_x(&mut state.ball.vel);
        state.events.push(GameEvent::WallBounce);
    }

    // Scoring lines: reaching the top line scores for the player, the bottom for the AI
    let (top, bottom) = scoring_lines_reached(state.ball.pos, arena);
    if top {
        reflect_y(&mut state.ball.vel);
        score(state, Side::Player);
    }
    if bottom {
        reflect_y(&mut state.ball.vel);
        score(state, Side::Ai);
    }

    // Paddles
    if hits_paddle(&state.ball, &state.player, Side::Player, arena) {
        reflect_y(&mut state.ball.vel);
        state.events.push(GameEvent::PaddleHit(Side::Player));
    }
    if hits_paddle(&state.ball, &state.ai, Side::Ai, arena) {
        reflect_y(&mut state.ball.vel);
        state.events.push(GameEvent::PaddleHit(Side::Ai));
    }

    // AI tracks the ball perfectly, even on the tick that ends the game
    state.ai.x = state.ball.pos.x;

    for event in &state.events {
        log::trace!("tick {}: {:?}", state.time_ticks, event);
    }
}

/// Award a point and end the round
fn score(state: &mut GameState, side: Side) {
    state.scores.award(side);
    state.game_over = true;
    state.events.push(GameEvent::Scored(side));
    log::debug!(
        "{:?} scored at tick {} (player {} - ai {})",
        side,
        state.time_ticks,
        state.scores.player,
        state.scores.ai
    );
}
