//! Arena configuration and host settings
//!
//! `ArenaConfig` is the fixed geometry the simulation runs against.
//! `Settings` wraps it with the native host's preferences and is persisted
//! as JSON next to the score file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fixed arena geometry and initial entity placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    /// Scoring line for the player (ball reaching it scores for the player)
    pub top_boundary: f32,
    /// Scoring line for the AI
    pub bottom_boundary: f32,
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_draw_inset: f32,
    pub ball_start: Vec2,
    pub ball_start_vel: Vec2,
    pub paddle_start_x: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            top_boundary: TOP_BOUNDARY,
            bottom_boundary: BOTTOM_BOUNDARY,
            ball_radius: BALL_RADIUS,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_draw_inset: PADDLE_DRAW_INSET,
            ball_start: Vec2::new(BALL_START_X, BALL_START_Y),
            ball_start_vel: Vec2::new(BALL_START_DX, BALL_START_DY),
            paddle_start_x: PADDLE_START_X,
        }
    }
}

impl ArenaConfig {
    /// Reject geometry the simulation cannot run against
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0.0 && self.height > 0.0,
            "arena must have positive size, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.ball_radius > 0.0,
            "ball radius must be positive, got {}",
            self.ball_radius
        );
        ensure!(
            self.ball_radius * 2.0 < self.width,
            "ball (radius {}) does not fit in an arena {} wide",
            self.ball_radius,
            self.width
        );
        ensure!(
            self.paddle_width > 0.0 && self.paddle_height > 0.0,
            "paddle must have positive size, got {}x{}",
            self.paddle_width,
            self.paddle_height
        );
        ensure!(
            self.paddle_width < self.width,
            "paddle width {} must be smaller than arena width {}",
            self.paddle_width,
            self.width
        );
        ensure!(
            self.top_boundary < self.bottom_boundary,
            "top boundary {} must lie above bottom boundary {}",
            self.top_boundary,
            self.bottom_boundary
        );
        Ok(())
    }

    /// Lowest x the player paddle center may take
    pub fn paddle_min_x(&self) -> f32 {
        self.paddle_width / 2.0
    }

    /// Highest x the player paddle center may take
    pub fn paddle_max_x(&self) -> f32 {
        self.width - self.paddle_width / 2.0
    }

    /// y the ball's lower edge must reach to touch the player paddle
    pub fn player_paddle_band(&self) -> f32 {
        self.height - self.paddle_height - self.paddle_margin
    }

    /// y the ball's upper edge must reach to touch the AI paddle
    pub fn ai_paddle_band(&self) -> f32 {
        self.paddle_height + self.paddle_margin
    }

    /// Render y of the player paddle center
    pub fn player_paddle_draw_y(&self) -> f32 {
        self.height - self.paddle_draw_inset
    }

    /// Render y of the AI paddle center
    pub fn ai_paddle_draw_y(&self) -> f32 {
        self.paddle_draw_inset
    }
}

/// Native host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena: ArenaConfig,
    /// Scheduler period (milliseconds)
    pub tick_interval_ms: u64,
    /// JSON file holding the persisted scores
    pub scores_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            tick_interval_ms: TICK_INTERVAL_MS,
            scores_path: PathBuf::from("ping_pong_scores.json"),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// A missing file means defaults. A file that cannot be parsed is
    /// reported and replaced by defaults rather than aborting the game.
    pub fn load(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading settings {}", path.display()));
            }
        };

        let settings = match serde_json::from_str::<Settings>(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring corrupt settings {}: {}", path.display(), e);
                Self::default()
            }
        };
        settings.arena.validate()?;
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing settings {}", path.display()))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arena_is_valid() {
        let arena = ArenaConfig::default();
        arena.validate().unwrap();
        assert_eq!(arena.paddle_min_x(), 50.0);
        assert_eq!(arena.paddle_max_x(), 350.0);
        assert_eq!(arena.player_paddle_band(), 730.0);
        assert_eq!(arena.ai_paddle_band(), 70.0);
        assert_eq!(arena.player_paddle_draw_y(), 720.0);
        assert_eq!(arena.ai_paddle_draw_y(), 80.0);
    }

    #[test]
    fn test_invalid_arena_rejected() {
        let wide_paddle = ArenaConfig {
            paddle_width: 400.0,
            ..Default::default()
        };
        assert!(wide_paddle.validate().is_err());

        let flat = ArenaConfig {
            height: 0.0,
            ..Default::default()
        };
        assert!(flat.validate().is_err());

        let inverted = ArenaConfig {
            top_boundary: 800.0,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_settings_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"tick_interval_ms": 16}"#).unwrap();
        assert_eq!(settings.tick_interval_ms, 16);
        assert_eq!(settings.arena, ArenaConfig::default());
    }

    #[test]
    fn test_settings_roundtrip_through_file() {
        let dir = std::env::temp_dir().join(format!("ping_pong_settings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");

        let mut settings = Settings::default();
        settings.tick_interval_ms = 20;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let path = std::env::temp_dir().join("ping_pong_settings_that_do_not_exist.json");
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, Settings::default());
    }
}
