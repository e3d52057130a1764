//! Browser entry point
//!
//! ```js
//! const game = new WebGame();
//! canvas.addEventListener("pointermove", e => game.set_player_target(e.offsetX));
//! setInterval(() => { game.tick(); draw(game); }, game.tick_interval_ms());
//! ```

use wasm_bindgen::prelude::*;

use crate::consts::TICK_INTERVAL_MS;
use crate::engine::Engine;
use crate::persistence::{KeyValueStore, LocalStorageStore, MemoryStore};
use crate::settings::ArenaConfig;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Ping Pong (web) starting...");
}

/// Engine handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    engine: Engine<Box<dyn KeyValueStore>>,
}

#[wasm_bindgen]
impl WebGame {
    /// New game over LocalStorage, or an in-memory store when storage is blocked
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let store: Box<dyn KeyValueStore> = match LocalStorageStore::open() {
            Some(storage) => Box::new(storage),
            None => Box::new(MemoryStore::new()),
        };
        WebGame {
            engine: Engine::new(ArenaConfig::default(), store),
        }
    }

    /// Advance one step; returns true on the tick that ended the game
    pub fn tick(&mut self) -> bool {
        let was_over = self.engine.is_game_over();
        self.engine.tick();
        !was_over && self.engine.is_game_over()
    }

    pub fn set_player_target(&mut self, x: f32) {
        self.engine.set_player_target(x);
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn tick_interval_ms(&self) -> u32 {
        TICK_INTERVAL_MS as u32
    }

    pub fn ball_x(&self) -> f32 {
        self.engine.snapshot().ball_x
    }

    pub fn ball_y(&self) -> f32 {
        self.engine.snapshot().ball_y
    }

    pub fn ball_radius(&self) -> f32 {
        self.engine.arena().ball_radius
    }

    pub fn player_paddle_x(&self) -> f32 {
        self.engine.player_paddle_x()
    }

    pub fn player_paddle_y(&self) -> f32 {
        self.engine.arena().player_paddle_draw_y()
    }

    pub fn ai_paddle_x(&self) -> f32 {
        self.engine.ai_paddle_x()
    }

    pub fn ai_paddle_y(&self) -> f32 {
        self.engine.arena().ai_paddle_draw_y()
    }

    pub fn paddle_width(&self) -> f32 {
        self.engine.arena().paddle_width
    }

    pub fn paddle_height(&self) -> f32 {
        self.engine.arena().paddle_height
    }

    pub fn score_player(&self) -> u32 {
        self.engine.scores().player
    }

    pub fn score_ai(&self) -> u32 {
        self.engine.scores().ai
    }

    pub fn game_over(&self) -> bool {
        self.engine.is_game_over()
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
