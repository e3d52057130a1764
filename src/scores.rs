//! Player and AI score pair
//!
//! Persisted through a `KeyValueStore` under two integer keys. Missing
//! keys mean zero; a failed write is logged and the game carries on.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;
use crate::sim::Side;

/// Running score pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub player: u32,
    pub ai: u32,
}

impl Scores {
    /// Store key for the player's score
    pub const PLAYER_KEY: &'static str = "playerScore";
    /// Store key for the AI's score
    pub const AI_KEY: &'static str = "aiScore";

    pub fn new(player: u32, ai: u32) -> Self {
        Self { player, ai }
    }

    /// Add one point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Ai => self.ai = self.ai.saturating_add(1),
        }
    }

    /// Read the score pair from a store
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let scores = Self {
            player: read_score(store, Self::PLAYER_KEY),
            ai: read_score(store, Self::AI_KEY),
        };
        log::info!("Loaded scores: player {} - ai {}", scores.player, scores.ai);
        scores
    }

    /// Write the score pair to a store, logging (not returning) failures
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        let result = store
            .set(Self::PLAYER_KEY, i64::from(self.player))
            .and_then(|()| store.set(Self::AI_KEY, i64::from(self.ai)));

        match result {
            Ok(()) => log::debug!("Scores saved: player {} - ai {}", self.player, self.ai),
            Err(e) => log::warn!("Failed to save scores: {:#}", e),
        }
    }
}

fn read_score(store: &dyn KeyValueStore, key: &str) -> u32 {
    match store.get(key) {
        None => 0,
        Some(value) => u32::try_from(value).unwrap_or_else(|_| {
            log::warn!("Stored {} out of range ({}), using 0", key, value);
            0
        }),
    }
}
