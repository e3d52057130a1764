//! Game engine: simulation state plus its score store
//!
//! The engine is what hosts talk to. A scheduler calls `tick`, an input
//! source calls `set_player_target`, a renderer reads `snapshot`. Scores
//! are read from the store once at construction and written back after
//! every scoring tick.

use std::sync::{Arc, Mutex};

use glam::Vec2;

use crate::persistence::KeyValueStore;
use crate::scores::Scores;
use crate::settings::ArenaConfig;
use crate::sim::{GameEvent, GameState, Snapshot, tick};

/// Engine shared between a scheduler thread and an input thread
///
/// One lock guards the whole engine so an input write is never seen mid-tick.
pub type SharedEngine<S> = Arc<Mutex<Engine<S>>>;

/// Pong engine
#[derive(Debug)]
pub struct Engine<S> {
    arena: ArenaConfig,
    state: GameState,
    store: S,
}

impl<S: KeyValueStore> Engine<S> {
    /// Create an engine, seeding the scores from `store`
    ///
    /// `arena` must pass `ArenaConfig::validate`.
    pub fn new(arena: ArenaConfig, store: S) -> Self {
        debug_assert!(arena.validate().is_ok(), "invalid arena: {:?}", arena);
        let scores = Scores::load(&store);
        log::info!("Engine ready ({}x{} arena)", arena.width, arena.height);
        Self {
            state: GameState::new(&arena, scores),
            arena,
            store,
        }
    }

    /// Wrap the engine for use from several threads
    pub fn into_shared(self) -> SharedEngine<S> {
        Arc::new(Mutex::new(self))
    }

    /// Advance one fixed step and return what happened
    pub fn tick(&mut self) -> &[GameEvent] {
        tick(&mut self.state, &self.arena);

        let scored = self
            .state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::Scored(_)));
        if scored {
            self.state.scores.save(&mut self.store);
            log::info!(
                "Game over: player {} - ai {}",
                self.state.scores.player,
                self.state.scores.ai
            );
        }

        &self.state.events
    }

    /// Point the player paddle at `x`, clamped to the arena
    pub fn set_player_target(&mut self, x: f32) {
        self.state.player.set_clamped(x, &self.arena);
    }

    /// Start a new round. Scores carry over.
    pub fn reset(&mut self) {
        self.state.reset(&self.arena);
        log::info!("New round");
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn scores(&self) -> Scores {
        self.state.scores
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn ball_position(&self) -> Vec2 {
        self.state.ball.pos
    }

    pub fn ball_velocity(&self) -> Vec2 {
        self.state.ball.vel
    }

    pub fn player_paddle_x(&self) -> f32 {
        self.state.player.x
    }

    pub fn ai_paddle_x(&self) -> f32 {
        self.state.ai.x
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    pub fn arena(&self) -> &ArenaConfig {
        &self.arena
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for hosts that stage positions directly (tests, replays)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
