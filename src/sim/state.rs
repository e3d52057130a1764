//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`. Geometry is
//! read from `ArenaConfig` and never stored here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::scores::Scores;
use crate::settings::ArenaConfig;

/// Which side of the table an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human paddle, defending the bottom edge
    Player,
    /// Reflex AI paddle, defending the top edge
    Ai,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a side wall
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// Ball reached a scoring line; the point goes to `Side`
    Scored(Side),
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball at its serve position
    pub fn serve(arena: &ArenaConfig) -> Self {
        Self::new(arena.ball_start, arena.ball_start_vel)
    }
}

/// A paddle, reduced to its horizontal center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
}

impl Paddle {
    pub fn new(x: f32) -> Self {
        Self { x }
    }

    /// Move the paddle center, keeping the paddle fully inside the arena
    pub fn set_clamped(&mut self, x: f32, arena: &ArenaConfig) {
        let x = if x.is_nan() { arena.width / 2.0 } else { x };
        self.x = x.clamp(arena.paddle_min_x(), arena.paddle_max_x());
    }

    /// Whether `x` lies within the paddle's horizontal extent (edges included)
    pub fn covers(&self, x: f32, paddle_width: f32) -> bool {
        let half = paddle_width / 2.0;
        x >= self.x - half && x <= self.x + half
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    /// Human paddle (bottom)
    pub player: Paddle,
    /// AI paddle (top)
    pub ai: Paddle,
    pub scores: Scores,
    pub game_over: bool,
    /// Simulation tick counter (ticks actually simulated)
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh game with the given starting scores
    pub fn new(arena: &ArenaConfig, scores: Scores) -> Self {
        Self {
            ball: Ball::serve(arena),
            player: Paddle::new(arena.paddle_start_x),
            ai: Paddle::new(arena.paddle_start_x),
            scores,
            game_over: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Put ball and paddles back at their starting positions. Scores survive.
    pub fn reset(&mut self, arena: &ArenaConfig) {
        self.ball = Ball::serve(arena);
        self.player = Paddle::new(arena.paddle_start_x);
        self.ai = Paddle::new(arena.paddle_start_x);
        self.game_over = false;
        self.events.clear();
    }

    /// Read-only view for drawing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            player_paddle_x: self.player.x,
            ai_paddle_x: self.ai.x,
            score_player: self.scores.player,
            score_ai: self.scores.ai,
            game_over: self.game_over,
        }
    }
}

/// Immutable copy of what a renderer needs each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub player_paddle_x: f32,
    pub ai_paddle_x: f32,
    pub score_player: u32,
    pub score_ai: u32,
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_matches_arena_defaults() {
        let arena = ArenaConfig::default();
        let state = GameState::new(&arena, Scores::new(3, 1));

        assert_eq!(state.ball.pos, Vec2::new(200.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(state.player.x, 100.0);
        assert_eq!(state.ai.x, 100.0);
        assert_eq!(state.scores, Scores::new(3, 1));
        assert!(!state.game_over);
    }

    #[test]
    fn test_paddle_clamp() {
        let arena = ArenaConfig::default();
        let mut paddle = Paddle::new(100.0);

        paddle.set_clamped(-30.0, &arena);
        assert_eq!(paddle.x, 50.0);

        paddle.set_clamped(1000.0, &arena);
        assert_eq!(paddle.x, 350.0);

        paddle.set_clamped(123.5, &arena);
        assert_eq!(paddle.x, 123.5);

        paddle.set_clamped(f32::NAN, &arena);
        assert_eq!(paddle.x, 200.0);

        paddle.set_clamped(f32::NEG_INFINITY, &arena);
        assert_eq!(paddle.x, 50.0);
    }

    #[test]
    fn test_paddle_covers_edges() {
        let paddle = Paddle::new(100.0);
        assert!(paddle.covers(50.0, 100.0));
        assert!(paddle.covers(150.0, 100.0));
        assert!(!paddle.covers(150.5, 100.0));
        assert!(!paddle.covers(49.9, 100.0));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let arena = ArenaConfig::default();
        let mut state = GameState::new(&arena, Scores::new(2, 5));
        state.player.x = 175.0;
        state.game_over = true;

        let snap = state.snapshot();
        assert_eq!(snap.ball_x, 200.0);
        assert_eq!(snap.ball_y, 200.0);
        assert_eq!(snap.player_paddle_x, 175.0);
        assert_eq!(snap.ai_paddle_x, 100.0);
        assert_eq!(snap.score_player, 2);
        assert_eq!(snap.score_ai, 5);
        assert!(snap.game_over);
    }
}
