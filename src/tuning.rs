//! Data-driven game balance
//!
//! Every numeric constant the simulation consumes lives here so the feel of
//! the game is data, not code. Defaults are the tuned arcade values; hosts
//! can deserialize overrides for playtesting.

use serde::{Deserialize, Serialize};

/// Balance constants for motion, contacts, skills, serving, and AI.
///
/// Units are pixels, pixels/tick, and pixels/tick² at the fixed 60 Hz step.
/// The coordinate space is y-down, so "lift" values are stored as positive
/// magnitudes and applied with a negative sign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Paddle motion ===
    /// Horizontal run speed
    pub paddle_speed: f32,
    /// Jump launch speed
    pub paddle_jump: f32,
    /// Gravity applied to paddles (heavier than the ball's)
    pub gravity_paddle: f32,
    /// Paddle hitbox radius (half the sprite extent)
    pub paddle_radius: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Gravity applied to the ball (much lighter than the paddles')
    pub gravity_ball: f32,
    /// Restitution for the midline ground bounce
    pub ball_bounce: f32,
    /// Vertical speed below which a bouncing ball settles
    pub ball_rest_speed: f32,

    // === Contacts ===
    /// Overlap forgiven before a contact registers
    pub contact_slack: f32,
    /// Extra reach beyond the contact radius for skill triggers
    pub skill_reach: f32,
    /// Speed of the radial launch on a plain paddle contact
    pub contact_force: f32,

    // === Skills ===
    /// Bump: small horizontal push toward the net
    pub bump_push: f32,
    /// Bump: upward speed
    pub bump_lift: f32,
    /// Set: upward speed (sets are pure vertical)
    pub set_lift: f32,
    /// Spike: horizontal drive toward the opponent
    pub spike_drive: f32,
    /// Spike: downward speed
    pub spike_smash: f32,
    /// Block: horizontal push back toward the blocker's own side
    pub block_push: f32,
    /// Block: upward speed
    pub block_lift: f32,
    /// Ball must be at least this far above the paddle center to spike/block
    pub ball_above_margin: f32,
    /// Paddle must be within this distance of the net to block
    pub block_net_range: f32,
    /// Recovery ticks after each skill, during which none can re-fire
    pub bump_recovery: u32,
    pub set_recovery: u32,
    pub spike_recovery: u32,
    pub block_recovery: u32,

    // === Net ===
    /// Minimum upward speed off the net top
    pub net_top_min_lift: f32,
    /// Horizontal shove toward the approach side on a net-top bounce
    pub net_top_nudge: f32,
    /// Minimum outward speed when rejected off the side of the net
    pub net_min_exit: f32,

    // === Serve ===
    /// Server center distance from its own back wall
    pub serve_back_offset: f32,
    /// Ball rest offset from the server center, toward the net
    pub serve_ball_dx: f32,
    /// Ball rest offset above the server center
    pub serve_ball_dy: f32,
    /// Serve velocity, toward the opponent
    pub serve_push: f32,
    /// Serve velocity, upward
    pub serve_lift: f32,
    /// Ticks an AI server waits before auto-serving
    pub serve_delay_ticks: u32,
    /// Standing post distance from the net for front-court paddles
    pub front_post_offset: f32,
    /// Standing post distance from the own wall for back-court paddles
    pub back_post_offset: f32,

    // === AI ===
    /// Tracking deadzone; inside it the AI stands still
    pub ai_deadzone: f32,
    /// Horizontal range within which an AI considers jumping at the ball
    pub ai_jump_range: f32,
    /// Ticks a support paddle disengages after its own touch
    pub support_touch_cooldown: u32,

    // === Match ===
    /// Points to take a set; scores roll over and the set counter increments
    pub set_target: u16,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: 3.0,
            paddle_jump: 8.0,
            gravity_paddle: 0.35,
            paddle_radius: 32.0,

            ball_radius: 16.0,
            gravity_ball: 0.08,
            ball_bounce: 0.55,
            ball_rest_speed: 1.0,

            contact_slack: 8.0,
            skill_reach: 8.0,
            contact_force: 3.5,

            bump_push: 1.2,
            bump_lift: 2.5,
            set_lift: 3.5,
            spike_drive: 3.2,
            spike_smash: 4.2,
            block_push: 2.2,
            block_lift: 2.2,
            ball_above_margin: 24.0,
            block_net_range: 40.0,
            bump_recovery: 18,
            set_recovery: 18,
            spike_recovery: 20,
            block_recovery: 16,

            net_top_min_lift: 1.6,
            net_top_nudge: 0.8,
            net_min_exit: 1.0,

            serve_back_offset: 72.0,
            serve_ball_dx: 72.0,
            serve_ball_dy: 64.0,
            serve_push: 2.2,
            serve_lift: 2.2,
            serve_delay_ticks: 40,
            front_post_offset: 128.0,
            back_post_offset: 48.0,

            ai_deadzone: 8.0,
            ai_jump_range: 48.0,
            support_touch_cooldown: 45,

            set_target: 11,
        }
    }
}

impl Tuning {
    /// Contact distance between the ball and a paddle (overlap already forgiven)
    #[inline]
    pub fn contact_distance(&self) -> f32 {
        self.ball_radius + self.paddle_radius - self.contact_slack
    }

    /// Distance within which skill triggers are evaluated
    #[inline]
    pub fn skill_distance(&self) -> f32 {
        self.ball_radius + self.paddle_radius + self.skill_reach
    }
}
