//! Ball collision resolution against the court and the paddles
//!
//! Every resolver repositions the ball out of whatever it hit in the same
//! tick it detects the overlap, so no contact ever persists across ticks.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::court::{Court, Side};
use super::state::{Ball, Paddle};
use crate::tuning::Tuning;

/// Below this separation the contact normal is undefined and the launch
/// falls back to straight up.
const CONTACT_EPSILON: f32 = 1e-4;

/// Outcome of resolving the ball against the ground line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundOutcome {
    /// No ground contact this tick
    Airborne,
    /// The ball landed strictly inside one half; that side loses the rally
    Landed(Side),
    /// Dead-center landing: bounced instead of scoring
    Bounced,
}

/// Side walls reflect the ball elastically
pub fn resolve_walls(ball: &mut Ball, court: &Court) {
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = -ball.vel.x;
    } else if ball.pos.x + ball.radius > court.width {
        ball.pos.x = court.width - ball.radius;
        ball.vel.x = -ball.vel.x;
    }
}

/// The net occupies a thin band below the net top. A ball descending onto
/// the top bounces up and gets shoved back toward the side it came from; a
/// ball hitting the side is seated against the band and sent back out with
/// at least the minimum exit speed. Either way the ball never tunnels
/// through to the other half.
pub fn resolve_net(ball: &mut Ball, court: &Court, tuning: &Tuning) {
    if !court.in_net_band(ball.pos.x, ball.radius) {
        return;
    }
    let net_top = court.net_top_y();
    if ball.pos.y + ball.radius <= net_top {
        return;
    }

    let mid = court.mid_x();
    if ball.vel.y > 0.0 && ball.pos.y < net_top {
        // Descending across the top edge
        let lift = (ball.vel.y * tuning.ball_bounce).max(tuning.net_top_min_lift);
        ball.vel.y = -lift;
        let toward_approach = if ball.pos.x < mid { -1.0 } else { 1.0 };
        ball.vel.x += toward_approach * tuning.net_top_nudge;
        ball.pos.y = net_top - ball.radius;
        return;
    }

    // Side hit
    let exit = ball.vel.x.abs().max(tuning.net_min_exit);
    if ball.pos.x < mid {
        ball.pos.x = mid - court.net_half_width - ball.radius;
        ball.vel.x = -exit;
    } else {
        ball.pos.x = mid + court.net_half_width + ball.radius;
        ball.vel.x = exit;
    }
}

/// Ground contact ends the rally unless the ball lands dead on the midline,
/// where neither side can legally stand; that column bounces with
/// restitution and settles once too slow.
pub fn resolve_ground(ball: &mut Ball, court: &Court, tuning: &Tuning) -> GroundOutcome {
    if ball.pos.y + ball.radius <= court.ground_y {
        return GroundOutcome::Airborne;
    }
    let mid = court.mid_x();
    if ball.pos.x < mid {
        return GroundOutcome::Landed(Side::Left);
    }
    if ball.pos.x > mid {
        return GroundOutcome::Landed(Side::Right);
    }

    ball.pos.y = court.ground_y - ball.radius;
    ball.vel.y = -(ball.vel.y * tuning.ball_bounce);
    if ball.vel.y.abs() < tuning.ball_rest_speed {
        ball.vel.y = 0.0;
    }
    GroundOutcome::Bounced
}

/// Circle-vs-circle paddle contact. On hit the ball is launched radially
/// away from the paddle center at the fixed contact speed and repositioned
/// to the exact contact distance. Returns whether a contact happened; the
/// caller owns touch bookkeeping, and a skill firing later in the same tick
/// overrides this velocity.
pub fn resolve_paddle_contact(ball: &mut Ball, paddle: &Paddle, tuning: &Tuning) -> bool {
    let delta = ball.pos - paddle.pos;
    let dist = delta.length();
    let contact = tuning.contact_distance();
    if dist >= contact {
        return false;
    }

    let angle = if dist < CONTACT_EPSILON {
        // Centers coincide; launch straight up
        -FRAC_PI_2
    } else {
        delta.y.atan2(delta.x)
    };
    let dir = Vec2::new(angle.cos(), angle.sin());
    ball.vel = dir * tuning.contact_force;
    ball.pos = paddle.pos + dir * contact;
    true
}
