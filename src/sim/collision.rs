//! Collision checks for the rectangular arena
//!
//! Every response is an axis-aligned reflection: one velocity component
//! changes sign and keeps its magnitude. Positions are never corrected.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::settings::ArenaConfig;

/// Whether the ball touches or passes a side wall
pub fn hits_side_wall(pos: Vec2, arena: &ArenaConfig) -> bool {
    let r = arena.ball_radius;
    pos.x <= r || pos.x >= arena.width - r
}

/// Which scoring lines the ball has reached, as `(top, bottom)`
pub fn scoring_lines_reached(pos: Vec2, arena: &ArenaConfig) -> (bool, bool) {
    let r = arena.ball_radius;
    let top = pos.y <= arena.top_boundary + r;
    let bottom = pos.y >= arena.bottom_boundary - r;
    (top, bottom)
}

/// Whether the ball is inside a paddle's collision band and horizontal extent
pub fn hits_paddle(ball: &Ball, paddle: &Paddle, side: Side, arena: &ArenaConfig) -> bool {
    let r = arena.ball_radius;
    let in_band = match side {
        Side::Player => ball.pos.y + r >= arena.player_paddle_band(),
        Side::Ai => ball.pos.y - r <= arena.ai_paddle_band(),
    };
    in_band && paddle.covers(ball.pos.x, arena.paddle_width)
}

/// Flip the horizontal velocity component
#[inline]
pub fn reflect_x(vel: &mut Vec2) {
    vel.x = -vel.x;
}

/// Flip the vertical velocity component
#[inline]
pub fn reflect_y(vel: &mut Vec2) {
    vel.y = -vel.y;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_walls() {
        let arena = ArenaConfig::default();
        assert!(hits_side_wall(Vec2::new(15.0, 300.0), &arena));
        assert!(hits_side_wall(Vec2::new(385.0, 300.0), &arena));
        assert!(!hits_side_wall(Vec2::new(15.5, 300.0), &arena));
        assert!(!hits_side_wall(Vec2::new(200.0, 300.0), &arena));
    }

    #[test]
    fn test_scoring_lines_use_radius() {
        let arena = ArenaConfig::default();
        // top line at 50 + 15, bottom at 750 - 15
        assert_eq!(scoring_lines_reached(Vec2::new(200.0, 65.0), &arena), (true, false));
        assert_eq!(scoring_lines_reached(Vec2::new(200.0, 66.0), &arena), (false, false));
        assert_eq!(scoring_lines_reached(Vec2::new(200.0, 735.0), &arena), (false, true));
        assert_eq!(scoring_lines_reached(Vec2::new(200.0, 734.0), &arena), (false, false));
    }

    #[test]
    fn test_player_paddle_band() {
        let arena = ArenaConfig::default();
        let paddle = Paddle::new(200.0);

        // lower edge reaches 730 at y = 715
        let ball = Ball::new(Vec2::new(220.0, 715.0), Vec2::new(4.0, 4.0));
        assert!(hits_paddle(&ball, &paddle, Side::Player, &arena));

        let above = Ball::new(Vec2::new(220.0, 714.0), Vec2::new(4.0, 4.0));
        assert!(!hits_paddle(&above, &paddle, Side::Player, &arena));

        let wide = Ball::new(Vec2::new(260.0, 715.0), Vec2::new(4.0, 4.0));
        assert!(!hits_paddle(&wide, &paddle, Side::Player, &arena));
    }

    #[test]
    fn test_ai_paddle_band() {
        let arena = ArenaConfig::default();
        let paddle = Paddle::new(100.0);

        // upper edge reaches 70 at y = 85
        let ball = Ball::new(Vec2::new(150.0, 85.0), Vec2::new(4.0, -4.0));
        assert!(hits_paddle(&ball, &paddle, Side::Ai, &arena));

        let below = Ball::new(Vec2::new(150.0, 86.0), Vec2::new(4.0, -4.0));
        assert!(!hits_paddle(&below, &paddle, Side::Ai, &arena));
    }

    #[test]
    fn test_reflection_preserves_magnitude() {
        let mut vel = Vec2::new(-4.0, 3.0);
        reflect_x(&mut vel);
        assert_eq!(vel, Vec2::new(4.0, 3.0));
        reflect_y(&mut vel);
        assert_eq!(vel, Vec2::new(4.0, -3.0));
    }
}
