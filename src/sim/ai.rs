//! AI decision heuristics for the non-human paddles
//!
//! Decisions are re-derived from scratch every tick from the current ball
//! and paddle state; the only memory between ticks is the skill timers and
//! the support cooldown stored on the paddle. Randomness comes exclusively
//! from the match RNG so seeded runs replay identically.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::court::Court;
use super::state::{Ball, Paddle, PaddleIntent};
use crate::tuning::Tuning;

/// How a profile positions itself when the ball is in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiStyle {
    /// Chases the ball anywhere in its half and presses the attack
    Striker,
    /// Holds a home post and only closes when the ball comes near
    Support,
}

/// Parameters for one AI-driven paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiProfile {
    pub style: AiStyle,
    /// Movement scale relative to full paddle speed
    pub speed_factor: f32,
    /// Per-tick probability of taking an available jump
    pub jump_chance: f32,
    /// Horizontal band the paddle tracks the ball within
    pub zone_min_x: f32,
    pub zone_max_x: f32,
    /// Support styles engage once the ball is this close to the home post
    pub engage_dist: f32,
    /// Whether this profile ever requests a spike
    pub may_spike: bool,
    /// Whether a counted touch starts the support cooldown
    pub rests_after_touch: bool,
}

impl AiProfile {
    /// The opposing captain: full-court striker, serves for its side
    pub fn primary(court: &Court, tuning: &Tuning) -> Self {
        Self {
            style: AiStyle::Striker,
            speed_factor: 0.9,
            jump_chance: 0.35,
            zone_min_x: court.mid_x() + tuning.paddle_radius,
            zone_max_x: court.width - tuning.paddle_radius,
            engage_dist: court.width,
            may_spike: true,
            rests_after_touch: false,
        }
    }

    /// Opposing backline: slower, rarely jumps, keeps to the rear quarter
    pub fn secondary(court: &Court, tuning: &Tuning) -> Self {
        Self {
            style: AiStyle::Support,
            speed_factor: 0.75,
            jump_chance: 0.12,
            zone_min_x: court.width * 0.7,
            zone_max_x: court.width - tuning.paddle_radius,
            engage_dist: court.width * 0.35,
            may_spike: false,
            rests_after_touch: false,
        }
    }

    /// The human's backline partner. Bump and set only, and a touch puts it
    /// on cooldown so it cannot hog all three touches.
    pub fn teammate(court: &Court, tuning: &Tuning) -> Self {
        Self {
            style: AiStyle::Support,
            speed_factor: 0.75,
            jump_chance: 0.1,
            zone_min_x: tuning.paddle_radius,
            zone_max_x: court.width * 0.3,
            engage_dist: court.width * 0.35,
            may_spike: false,
            rests_after_touch: true,
        }
    }

    /// Stand-in driver for the human slot in unattended runs
    pub fn autopilot(court: &Court, tuning: &Tuning) -> Self {
        Self {
            style: AiStyle::Striker,
            speed_factor: 1.0,
            jump_chance: 0.3,
            zone_min_x: tuning.paddle_radius,
            zone_max_x: court.mid_x() - tuning.paddle_radius,
            engage_dist: court.width,
            may_spike: true,
            rests_after_touch: false,
        }
    }
}

/// Produce one tick's intent for an AI paddle
pub fn decide(
    profile: &AiProfile,
    paddle: &Paddle,
    ball: &Ball,
    court: &Court,
    tuning: &Tuning,
    rng: &mut Pcg32,
) -> PaddleIntent {
    let mut intent = PaddleIntent::default();

    if paddle.touch_rest > 0 {
        // On cooldown: walk back to the post and fire nothing
        let dx = paddle.home_x - paddle.pos.x;
        if dx.abs() > tuning.ai_deadzone {
            intent.move_x = dx.signum() * profile.speed_factor;
        }
        return intent;
    }

    let on_own_side = court.side_of(ball.pos.x) == paddle.side;
    let engaged = match profile.style {
        // Strikers also pre-position under a ball that is still crossing
        AiStyle::Striker => on_own_side || ball.pos.y < court.net_top_y(),
        AiStyle::Support => {
            on_own_side && (ball.pos.x - paddle.home_x).abs() < profile.engage_dist
        }
    };

    let target_x = if engaged {
        ball.pos.x.clamp(profile.zone_min_x, profile.zone_max_x)
    } else {
        paddle.home_x
    };
    let dx = target_x - paddle.pos.x;
    if dx.abs() > tuning.ai_deadzone {
        intent.move_x = dx.signum() * profile.speed_factor;
    }

    if engaged
        && paddle.grounded
        && ball.pos.y < paddle.pos.y - paddle.radius
        && (ball.pos.x - paddle.pos.x).abs() < tuning.ai_jump_range
    {
        intent.jump = rng.random::<f32>() < profile.jump_chance;
    }

    if engaged {
        let ball_above = ball.pos.y < paddle.pos.y - tuning.ball_above_margin;
        intent.bump = true;
        intent.set = ball_above;
        intent.spike = profile.may_spike && ball_above;
    }

    intent
}
