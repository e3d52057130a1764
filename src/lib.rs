//! Ping Pong - a single-player Pong game core
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (ball, paddles, scoring, game over)
//! - `engine`: Stateful engine owning the simulation and the score store
//! - `persistence`: Key-value stores for the two persisted scores
//! - `scores`: Score pair and its load/save policy
//! - `settings`: Arena configuration and host settings
//! - `scheduler`: Fixed-interval tick driver for a shared engine
//! - `autopilot`: Scripted input source for headless play
//! - `platform`: Browser bindings (wasm32 only)

pub mod autopilot;
pub mod engine;
pub mod persistence;
pub mod platform;
pub mod scheduler;
pub mod scores;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use engine::{Engine, SharedEngine};
pub use persistence::{JsonFileStore, KeyValueStore, MemoryStore};
pub use scheduler::{FixedStepScheduler, SchedulerHandle};
pub use scores::Scores;
pub use settings::{ArenaConfig, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed tick interval of the reference game loop (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 10;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 800.0;
    /// Scoring lines (y), measured from the top of the arena
    pub const TOP_BOUNDARY: f32 = 50.0;
    pub const BOTTOM_BOUNDARY: f32 = 750.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_START_X: f32 = 200.0;
    pub const BALL_START_Y: f32 = 200.0;
    pub const BALL_START_DX: f32 = 4.0;
    pub const BALL_START_DY: f32 = 4.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_START_X: f32 = 100.0;
    /// Gap between a paddle's collision band and its arena edge, on top of the paddle height
    pub const PADDLE_MARGIN: f32 = 50.0;
    /// Distance from an arena edge to the drawn paddle center
    pub const PADDLE_DRAW_INSET: f32 = 80.0;
}
