//! Scripted input source for the player paddle
//!
//! Used by the headless host in place of a pointer: it reads the render
//! snapshot and produces a target x, the same way a drag gesture would.

use crate::sim::Snapshot;

/// Follows the ball with a fixed offset and a speed limit
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Added to the ball x before moving (positive = aim right of the ball)
    pub offset: f32,
    /// Largest change in target per update; `None` snaps straight to the ball
    pub max_step: Option<f32>,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            offset: 0.0,
            max_step: Some(3.0),
        }
    }
}

impl Autopilot {
    pub fn new(offset: f32, max_step: Option<f32>) -> Self {
        Self { offset, max_step }
    }

    /// Target x for the player paddle given the latest snapshot
    ///
    /// The result is not clamped; the engine clamps every target it receives.
    pub fn target(&self, snap: &Snapshot) -> f32 {
        let desired = snap.ball_x + self.offset;
        match self.max_step {
            Some(step) => {
                let delta = (desired - snap.player_paddle_x).clamp(-step, step);
                snap.player_paddle_x + delta
            }
            None => desired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(ball_x: f32, paddle_x: f32) -> Snapshot {
        Snapshot {
            ball_x,
            ball_y: 400.0,
            player_paddle_x: paddle_x,
            ai_paddle_x: ball_x,
            score_player: 0,
            score_ai: 0,
            game_over: false,
        }
    }

    #[test]
    fn test_snaps_without_limit() {
        let pilot = Autopilot::new(10.0, None);
        assert_eq!(pilot.target(&snap(200.0, 100.0)), 210.0);
    }

    #[test]
    fn test_speed_limited() {
        let pilot = Autopilot::default();
        assert_eq!(pilot.target(&snap(200.0, 100.0)), 103.0);
        assert_eq!(pilot.target(&snap(50.0, 100.0)), 97.0);
        assert_eq!(pilot.target(&snap(101.0, 100.0)), 101.0);
    }
}
