//! Paddle and ball motion integration
//!
//! Explicit per-tick Euler: move by the current velocity, then accelerate.
//! Speeds are px/tick at the fixed step, so no `dt` appears anywhere.

use super::court::Court;
use super::state::{Ball, Paddle, PaddleIntent};
use crate::tuning::Tuning;

/// Advance a paddle one tick from its intent: run, jump, fall, clamp.
pub fn step_paddle(paddle: &mut Paddle, intent: &PaddleIntent, court: &Court, tuning: &Tuning) {
    paddle.vel.x = intent.move_x * tuning.paddle_speed;
    if intent.move_x > 0.0 {
        paddle.facing = 1.0;
    } else if intent.move_x < 0.0 {
        paddle.facing = -1.0;
    }

    if intent.jump && paddle.grounded {
        paddle.vel.y = -tuning.paddle_jump;
        paddle.grounded = false;
    }

    paddle.pos += paddle.vel;
    paddle.vel.y += tuning.gravity_paddle;

    // Paddles never cross the net plane or leave the court
    let (min_x, max_x) = court.half_court_range(paddle.side, paddle.radius);
    paddle.pos.x = paddle.pos.x.clamp(min_x, max_x);

    let floor = court.ground_y - paddle.radius;
    if paddle.pos.y > floor {
        paddle.pos.y = floor;
        paddle.vel.y = 0.0;
        paddle.grounded = true;
    } else if paddle.pos.y < paddle.radius {
        // Ceiling stop, no bounce
        paddle.pos.y = paddle.radius;
    }
}

/// Advance the ball one tick under its own gravity
pub fn step_ball(ball: &mut Ball, tuning: &Tuning) {
    ball.pos += ball.vel;
    ball.vel.y += tuning.gravity_ball;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::court::Side;
    use crate::sim::state::{ControlSource, Role};
    use glam::Vec2;

    fn paddle(role: Role, x: f32) -> Paddle {
        Paddle::new(
            role,
            ControlSource::Human,
            x,
            &Court::default(),
            &Tuning::default(),
        )
    }

    #[test]
    fn test_run_sets_velocity_and_facing() {
        let court = Court::default();
        let tuning = Tuning::default();
        let mut p = paddle(Role::Human, 112.0);
        let run = PaddleIntent {
            move_x: 1.0,
            ..Default::default()
        };
        step_paddle(&mut p, &run, &court, &tuning);
        assert_eq!(p.vel.x, tuning.paddle_speed);
        assert_eq!(p.facing, 1.0);
        assert_eq!(p.pos.x, 115.0);

        // Stopping keeps the last facing
        step_paddle(&mut p, &PaddleIntent::default(), &court, &tuning);
        assert_eq!(p.vel.x, 0.0);
        assert_eq!(p.facing, 1.0);
    }

    #[test]
    fn test_jump_only_fires_from_the_ground() {
        let court = Court::default();
        let tuning = Tuning::default();
        let mut p = paddle(Role::Human, 112.0);
        let jump = PaddleIntent {
            jump: true,
            ..Default::default()
        };
        step_paddle(&mut p, &jump, &court, &tuning);
        assert!(!p.grounded);
        let vy_after_first = p.vel.y;

        // Holding jump mid-air must not re-launch
        step_paddle(&mut p, &jump, &court, &tuning);
        assert_eq!(p.vel.y, vy_after_first + tuning.gravity_paddle);
    }

    #[test]
    fn test_jump_arc_lands_back_on_the_ground() {
        let court = Court::default();
        let tuning = Tuning::default();
        let mut p = paddle(Role::Primary, 368.0);
        let floor = court.ground_y - p.radius;
        step_paddle(
            &mut p,
            &PaddleIntent {
                jump: true,
                ..Default::default()
            },
            &court,
            &tuning,
        );
        let mut rose = false;
        for _ in 0..240 {
            if p.pos.y < floor - 1.0 {
                rose = true;
            }
            step_paddle(&mut p, &PaddleIntent::default(), &court, &tuning);
            if p.grounded {
                break;
            }
        }
        assert!(rose);
        assert!(p.grounded);
        assert_eq!(p.pos.y, floor);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn test_left_paddle_stops_at_the_net_plane() {
        let court = Court::default();
        let tuning = Tuning::default();
        let mut p = paddle(Role::Human, 112.0);
        let run = PaddleIntent {
            move_x: 1.0,
            ..Default::default()
        };
        for _ in 0..200 {
            step_paddle(&mut p, &run, &court, &tuning);
        }
        assert_eq!(p.pos.x, court.mid_x() - p.radius);
    }

    #[test]
    fn test_right_paddle_stops_at_its_own_wall() {
        let court = Court::default();
        let tuning = Tuning::default();
        let mut p = paddle(Role::Secondary, 432.0);
        let run = PaddleIntent {
            move_x: 1.0,
            ..Default::default()
        };
        for _ in 0..200 {
            step_paddle(&mut p, &run, &court, &tuning);
        }
        assert_eq!(p.pos.x, court.width - p.radius);
    }

    #[test]
    fn test_ball_integration_order() {
        let tuning = Tuning::default();
        let mut ball = Ball {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(2.0, -3.0),
            radius: tuning.ball_radius,
        };
        step_ball(&mut ball, &tuning);
        // Position moves by the pre-gravity velocity
        assert_eq!(ball.pos, Vec2::new(102.0, 97.0));
        assert_eq!(ball.vel.y, -3.0 + tuning.gravity_ball);
    }

    #[test]
    fn test_ai_profiles_scale_below_full_speed() {
        let court = Court::default();
        let tuning = Tuning::default();
        let mut p = paddle(Role::Primary, 368.0);
        let run = PaddleIntent {
            move_x: -0.9,
            ..Default::default()
        };
        step_paddle(&mut p, &run, &court, &tuning);
        assert_eq!(p.vel.x, -0.9 * tuning.paddle_speed);
        assert_eq!(p.facing, -1.0);
        assert!(p.side == Side::Right);
    }
}
