//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed step only, one ball displacement per tick
//! - No clocks, no randomness
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{hits_paddle, hits_side_wall, scoring_lines_reached};
pub use state::{Ball, GameEvent, GameState, Paddle, Side, Snapshot};
pub use tick::tick;
