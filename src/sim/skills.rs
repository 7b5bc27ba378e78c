//! Skill resolution: bump, set, spike, and block
//!
//! Skills are scripted ball impulses gated by rally context. They evaluate
//! after paddle contacts each tick, against the touch counts from before
//! those contacts, and a skill that fires overwrites whatever velocity the
//! plain contact response gave the ball.

use glam::Vec2;

use super::court::Court;
use super::rally::TOUCH_LIMIT;
use super::state::{Ball, Paddle, PaddleIntent, Skill};
use crate::tuning::Tuning;

/// Try to fire one skill for a paddle this tick.
///
/// Requests are checked in fixed priority order (bump, set, spike, block)
/// and the first legal one wins. An ungated request is a silent no-op;
/// players mash buttons. `touches_before` is the firing side's touch count
/// from before this tick's contacts, so a bump can land on its very first
/// contact frame.
pub fn try_fire(
    paddle: &mut Paddle,
    intent: &PaddleIntent,
    ball: &mut Ball,
    touches_before: u8,
    court: &Court,
    tuning: &Tuning,
) -> Option<Skill> {
    // A spike runs to completion; everything else is blocked by recovery
    if paddle.skill == Skill::Spike || paddle.skill_timer > 0 {
        return None;
    }
    if ball.pos.distance(paddle.pos) >= tuning.skill_distance() {
        return None;
    }
    if court.side_of(ball.pos.x) != paddle.side {
        return None;
    }

    let out = paddle.side.outward_sign();
    let ball_above = ball.pos.y < paddle.pos.y - tuning.ball_above_margin;
    let mid_rally = touches_before > 0 && touches_before < TOUCH_LIMIT;

    if intent.bump && touches_before == 0 {
        ball.vel = Vec2::new(out * tuning.bump_push, -tuning.bump_lift);
        paddle.can_spike = false;
        return Some(paddle.fire_skill(Skill::Bump, tuning.bump_recovery));
    }

    if intent.set && mid_rally {
        ball.vel = Vec2::new(0.0, -tuning.set_lift);
        paddle.can_spike = true;
        return Some(paddle.fire_skill(Skill::Set, tuning.set_recovery));
    }

    if intent.spike
        && mid_rally
        && paddle.can_spike
        && paddle.airborne()
        && ball_above
        && paddle.last_skill == Some(Skill::Set)
    {
        ball.vel = Vec2::new(out * tuning.spike_drive, tuning.spike_smash);
        paddle.can_spike = false;
        return Some(paddle.fire_skill(Skill::Spike, tuning.spike_recovery));
    }

    if intent.block
        && mid_rally
        && paddle.airborne()
        && ball_above
        && (paddle.pos.x - court.mid_x()).abs() < tuning.block_net_range
    {
        ball.vel = Vec2::new(-out * tuning.block_push, -tuning.block_lift);
        paddle.can_spike = false;
        return Some(paddle.fire_skill(Skill::Block, tuning.block_recovery));
    }

    None
}

/// Decrement a paddle's recovery timer; at zero the skill state drops back
/// to idle.
pub fn tick_timers(paddle: &mut Paddle) {
    if paddle.skill_timer > 0 {
        paddle.skill_timer -= 1;
    }
    if paddle.skill_timer == 0 && paddle.skill != Skill::Idle {
        paddle.skill = Skill::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ControlSource, Role};

    struct Rig {
        court: Court,
        tuning: Tuning,
        paddle: Paddle,
        ball: Ball,
    }

    /// Paddle on its post with the ball in skill range straight above
    fn rig(role: Role) -> Rig {
        let court = Court::default();
        let tuning = Tuning::default();
        let x = match role.side() {
            crate::sim::court::Side::Left => 112.0,
            crate::sim::court::Side::Right => 368.0,
        };
        let paddle = Paddle::new(role, ControlSource::Human, x, &court, &tuning);
        let ball = Ball {
            pos: Vec2::new(x, paddle.pos.y - 40.0),
            vel: Vec2::new(1.0, 1.0),
            radius: tuning.ball_radius,
        };
        Rig {
            court,
            tuning,
            paddle,
            ball,
        }
    }

    fn intent_for(skill: Skill) -> PaddleIntent {
        PaddleIntent {
            bump: skill == Skill::Bump,
            set: skill == Skill::Set,
            spike: skill == Skill::Spike,
            block: skill == Skill::Block,
            ..Default::default()
        }
    }

    #[test]
    fn test_bump_fires_only_as_first_touch() {
        let mut r = rig(Role::Human);
        let fired = try_fire(
            &mut r.paddle,
            &intent_for(Skill::Bump),
            &mut r.ball,
            0,
            &r.court,
            &r.tuning,
        );
        assert_eq!(fired, Some(Skill::Bump));
        assert_eq!(r.ball.vel.x, r.tuning.bump_push);
        assert_eq!(r.ball.vel.y, -r.tuning.bump_lift);
        assert_eq!(r.paddle.skill_timer, r.tuning.bump_recovery);

        let mut r = rig(Role::Human);
        let fired = try_fire(
            &mut r.paddle,
            &intent_for(Skill::Bump),
            &mut r.ball,
            1,
            &r.court,
            &r.tuning,
        );
        assert_eq!(fired, None);
    }

    #[test]
    fn test_bump_pushes_outward_on_the_right_side() {
        let mut r = rig(Role::Primary);
        let fired = try_fire(
            &mut r.paddle,
            &intent_for(Skill::Bump),
            &mut r.ball,
            0,
            &r.court,
            &r.tuning,
        );
        assert_eq!(fired, Some(Skill::Bump));
        assert_eq!(r.ball.vel.x, -r.tuning.bump_push);
    }

    #[test]
    fn test_set_is_pure_vertical_and_arms_spike() {
        let mut r = rig(Role::Human);
        let fired = try_fire(
            &mut r.paddle,
            &intent_for(Skill::Set),
            &mut r.ball,
            1,
            &r.court,
            &r.tuning,
        );
        assert_eq!(fired, Some(Skill::Set));
        assert_eq!(r.ball.vel, Vec2::new(0.0, -r.tuning.set_lift));
        assert!(r.paddle.can_spike);
        assert_eq!(r.paddle.last_skill, Some(Skill::Set));
        // Grounded is fine for a set; only spikes and blocks need air
        assert!(r.paddle.grounded);
    }

    #[test]
    fn test_set_needs_a_prior_touch() {
        let mut r = rig(Role::Human);
        let fired = try_fire(
            &mut r.paddle,
            &intent_for(Skill::Set),
            &mut r.ball,
            0,
            &r.court,
            &r.tuning,
        );
        assert_eq!(fired, None);
        assert!(!r.paddle.can_spike);
    }

    #[test]
    fn test_spike_without_prior_set_is_a_silent_noop() {
        let mut r = rig(Role::Human);
        let vel_before = r.ball.vel;
        let fired = try_fire(
            &mut r.paddle,
            &intent_for(Skill::Spike),
            &mut r.ball,
            0,
            &r.court,
            &r.tuning,
        );
        assert_eq!(fired, None);
        assert_eq!(r.paddle.skill, Skill::Idle);
        assert_eq!(r.ball.vel, vel_before);
    }

    #[test]
    fn test_spike_requires_air_arm_and_set_history() {
        // Fully armed: airborne, can_spike, last skill was a set
        let mut r = rig(Role::Human);
        r.paddle.grounded = false;
        r.paddle.can_spike = true;
        r.paddle.last_skill = Some(Skill::Set);
        let fired = try_fire(
            &mut r.paddle,
            &intent_for(Skill::Spike),
            &mut r.ball,
            1,
            &r.court,
            &r.tuning,
        );
        assert_eq!(fired, Some(Skill::Spike));
        assert_eq!(r.ball.vel.x, r.tuning.spike_drive);
        assert_eq!(r.ball.vel.y, r.tuning.spike_smash);
        assert!(!r.paddle.can_spike);

        // Grounded kills it
        let mut r = rig(Role::Human);
        r.paddle.can_spike = true;
        r.paddle.last_skill = Some(Skill::Set);
        assert_eq!(
            try_fire(
                &mut r.paddle,
                &intent_for(Skill::Spike),
                &mut r.ball,
                1,
                &r.court,
                &r.tuning,
            ),
            None
        );

        // A bump since the set kills it too
        let mut r = rig(Role::Human);
        r.paddle.grounded = false;
        r.paddle.can_spike = true;
        r.paddle.last_skill = Some(Skill::Bump);
        assert_eq!(
            try_fire(
                &mut r.paddle,
                &intent_for(Skill::Spike),
                &mut r.ball,
                1,
                &r.court,
                &r.tuning,
            ),
            None
        );
    }

    #[test]
    fn test_spike_needs_the_ball_above() {
        let mut r = rig(Role::Human);
        r.paddle.grounded = false;
        r.paddle.can_spike = true;
        r.paddle.last_skill = Some(Skill::Set);
        // Ball level with the paddle center, inside the margin
        r.ball.pos.y = r.paddle.pos.y - r.tuning.ball_above_margin + 1.0;
        assert_eq!(
            try_fire(
                &mut r.paddle,
                &intent_for(Skill::Spike),
                &mut r.ball,
                1,
                &r.court,
                &r.tuning,
            ),
            None
        );
    }

    #[test]
    fn test_block_needs_net_proximity_and_air() {
        let court = Court::default();
        let tuning = Tuning::default();
        // Airborne at the net with the ball overhead
        let mut paddle = Paddle::new(
            Role::Primary,
            ControlSource::Human,
            court.mid_x() + tuning.paddle_radius,
            &court,
            &tuning,
        );
        paddle.grounded = false;
        paddle.pos.y = 120.0;
        let mut ball = Ball {
            pos: Vec2::new(paddle.pos.x + 4.0, paddle.pos.y - 40.0),
            vel: Vec2::new(-3.0, 2.0),
            radius: tuning.ball_radius,
        };
        let fired = try_fire(
            &mut paddle,
            &intent_for(Skill::Block),
            &mut ball,
            1,
            &court,
            &tuning,
        );
        assert_eq!(fired, Some(Skill::Block));
        // Rejection goes back into the blocker's own half, upward
        assert_eq!(ball.vel.x, tuning.block_push);
        assert_eq!(ball.vel.y, -tuning.block_lift);

        // Same setup deep in the backcourt is out of blocking range
        let mut far = rig(Role::Primary);
        far.paddle.grounded = false;
        far.ball.pos = Vec2::new(far.paddle.pos.x, far.paddle.pos.y - 40.0);
        assert_eq!(
            try_fire(
                &mut far.paddle,
                &intent_for(Skill::Block),
                &mut far.ball,
                1,
                &far.court,
                &far.tuning,
            ),
            None
        );
    }

    #[test]
    fn test_recovery_window_blocks_refire() {
        let mut r = rig(Role::Human);
        assert!(
            try_fire(
                &mut r.paddle,
                &intent_for(Skill::Bump),
                &mut r.ball,
                0,
                &r.court,
                &r.tuning,
            )
            .is_some()
        );

        // Mid-recovery nothing fires, not even a legal set
        let fired = try_fire(
            &mut r.paddle,
            &intent_for(Skill::Set),
            &mut r.ball,
            1,
            &r.court,
            &r.tuning,
        );
        assert_eq!(fired, None);

        for _ in 0..r.tuning.bump_recovery {
            tick_timers(&mut r.paddle);
        }
        assert_eq!(r.paddle.skill, Skill::Idle);
        assert_eq!(r.paddle.skill_timer, 0);

        let fired = try_fire(
            &mut r.paddle,
            &intent_for(Skill::Set),
            &mut r.ball,
            1,
            &r.court,
            &r.tuning,
        );
        assert_eq!(fired, Some(Skill::Set));
    }

    #[test]
    fn test_out_of_range_or_wrong_side_never_fires() {
        let mut r = rig(Role::Human);
        r.ball.pos.y = r.paddle.pos.y - r.tuning.skill_distance() - 1.0;
        assert_eq!(
            try_fire(
                &mut r.paddle,
                &intent_for(Skill::Bump),
                &mut r.ball,
                0,
                &r.court,
                &r.tuning,
            ),
            None
        );

        // Paddle at the net, ball just over the midline
        let court = Court::default();
        let tuning = Tuning::default();
        let mut paddle = Paddle::new(
            Role::Human,
            ControlSource::Human,
            court.mid_x() - tuning.paddle_radius,
            &court,
            &tuning,
        );
        let mut ball = Ball {
            pos: Vec2::new(court.mid_x() + 8.0, paddle.pos.y - 20.0),
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
        };
        assert_eq!(
            try_fire(
                &mut paddle,
                &intent_for(Skill::Bump),
                &mut ball,
                0,
                &court,
                &tuning,
            ),
            None
        );
    }

    #[test]
    fn test_priority_order_bump_beats_set() {
        let mut r = rig(Role::Human);
        let mash = PaddleIntent {
            bump: true,
            set: true,
            spike: true,
            block: true,
            ..Default::default()
        };
        let fired = try_fire(&mut r.paddle, &mash, &mut r.ball, 0, &r.court, &r.tuning);
        assert_eq!(fired, Some(Skill::Bump));

        let mut r = rig(Role::Human);
        let fired = try_fire(&mut r.paddle, &mash, &mut r.ball, 2, &r.court, &r.tuning);
        assert_eq!(fired, Some(Skill::Set));
    }

    #[test]
    fn test_timer_expiry_returns_to_idle() {
        let mut r = rig(Role::Human);
        r.paddle.fire_skill(Skill::Block, 3);
        tick_timers(&mut r.paddle);
        tick_timers(&mut r.paddle);
        assert_eq!(r.paddle.skill, Skill::Block);
        tick_timers(&mut r.paddle);
        assert_eq!(r.paddle.skill, Skill::Idle);
        // Idle with no timer stays put
        tick_timers(&mut r.paddle);
        assert_eq!(r.paddle.skill, Skill::Idle);
        assert_eq!(r.paddle.skill_timer, 0);
    }
}
