//! One fixed step of the match loop
//!
//! One call to [`tick`] advances the match by exactly one step. The order
//! inside a play tick is a correctness requirement, not a convention:
//! contacts resolve before the fault check so a fourth touch ends the rally
//! on its own tick, and skills resolve after contacts so a fired skill
//! overrides the plain contact launch.

use super::ai::{self, AiProfile};
use super::collision::{self, GroundOutcome};
use super::court::Side;
use super::kinematics;
use super::skills;
use super::state::{ControlSource, MatchEvent, MatchPhase, MatchSim, PaddleIntent};

/// Host input sampled for one tick
///
/// Movement keys are level-triggered (held); the rest are one-shot actions
/// the host raises on the tick they happen.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub bump: bool,
    pub set: bool,
    pub spike: bool,
    pub block: bool,
    /// Serve action (human server only; AI servers run on a timer)
    pub serve: bool,
    /// Begin the match from the start screen
    pub start: bool,
    /// Idle/demo mode - a heuristic drives the human slot
    pub auto_pilot: bool,
}

impl TickInput {
    fn to_intent(&self) -> PaddleIntent {
        let mut move_x = 0.0;
        if self.move_left {
            move_x -= 1.0;
        }
        if self.move_right {
            move_x += 1.0;
        }
        PaddleIntent {
            move_x,
            jump: self.jump,
            bump: self.bump,
            set: self.set,
            spike: self.spike,
            block: self.block,
        }
    }
}

/// Advance the match state by one fixed timestep
pub fn tick(sim: &mut MatchSim, input: &TickInput) {
    sim.events.clear();
    sim.time_ticks += 1;

    match sim.phase {
        MatchPhase::Start => {
            if input.start {
                sim.begin_match();
            }
        }
        MatchPhase::Serve => serve_tick(sim, input),
        MatchPhase::Play => play_tick(sim, input),
    }
}

/// Serve phase: physics frozen, everyone holds the formation. A human
/// server fires on the serve action; an AI-driven server fires once the
/// delay elapses.
fn serve_tick(sim: &mut MatchSim, input: &TickInput) {
    sim.serve_ticks += 1;

    let human_serves = sim.server == Side::Left && !input.auto_pilot;
    let fire = if human_serves {
        input.serve
    } else {
        sim.serve_ticks > sim.tuning.serve_delay_ticks
    };
    if fire {
        sim.launch_serve();
    }
}

fn play_tick(sim: &mut MatchSim, input: &TickInput) {
    // 1. Decisions for every slot up front, from the same pre-move state
    let mut intents = [PaddleIntent::default(); 4];
    for slot in 0..sim.paddles.len() {
        intents[slot] = decide_for(sim, slot, input);
    }

    // 2. Paddle kinematics
    for slot in 0..sim.paddles.len() {
        kinematics::step_paddle(
            &mut sim.paddles[slot],
            &intents[slot],
            &sim.court,
            &sim.tuning,
        );
    }

    // 3. Ball: possession tracking, integration, court boundaries
    let side_now = sim.court.side_of(sim.ball.pos.x);
    sim.rally.update_side(side_now);

    kinematics::step_ball(&mut sim.ball, &sim.tuning);
    collision::resolve_walls(&mut sim.ball, &sim.court);
    collision::resolve_net(&mut sim.ball, &sim.court, &sim.tuning);

    if let GroundOutcome::Landed(landed_on) =
        collision::resolve_ground(&mut sim.ball, &sim.court, &sim.tuning)
    {
        // Landing on a half loses the rally for that half
        sim.award_point(landed_on.opposite());
        return;
    }

    // 4. Paddle contacts. The touch snapshot from before any contact is
    // what skills gate on, so a bump can fire on its own contact frame.
    let touches_before = sim.rally.touches;
    for slot in 0..sim.paddles.len() {
        if collision::resolve_paddle_contact(&mut sim.ball, &sim.paddles[slot], &sim.tuning) {
            let side = sim.paddles[slot].side;
            if sim.rally.register_touch(slot, side) {
                let rests = matches!(
                    &sim.paddles[slot].control,
                    ControlSource::Ai(p) if p.rests_after_touch
                );
                if rests {
                    sim.paddles[slot].touch_rest = sim.tuning.support_touch_cooldown;
                }
            }
        }
    }

    // 5. Skill resolution, in slot order; a fired skill overwrites the
    // contact launch velocity
    for slot in 0..sim.paddles.len() {
        let before = touches_before[sim.paddles[slot].side.index()];
        let fired = skills::try_fire(
            &mut sim.paddles[slot],
            &intents[slot],
            &mut sim.ball,
            before,
            &sim.court,
            &sim.tuning,
        );
        if let Some(skill) = fired {
            sim.events.push(MatchEvent::SkillFired {
                paddle: slot,
                skill,
            });
        }
    }

    // 6. Rally evaluation: the fourth touch ends the rally immediately
    if let Some(fault) = sim.rally.fault_side() {
        sim.award_point(fault.opposite());
        return;
    }

    // 7. Timers
    for paddle in &mut sim.paddles {
        skills::tick_timers(paddle);
        if paddle.touch_rest > 0 {
            paddle.touch_rest -= 1;
        }
    }
}

/// Resolve the intent for one slot: host input for the human (unless the
/// demo autopilot is on), role heuristics for everyone else.
fn decide_for(sim: &mut MatchSim, slot: usize, input: &TickInput) -> PaddleIntent {
    match &sim.paddles[slot].control {
        ControlSource::Human => {
            if input.auto_pilot {
                let profile = AiProfile::autopilot(&sim.court, &sim.tuning);
                ai::decide(
                    &profile,
                    &sim.paddles[slot],
                    &sim.ball,
                    &sim.court,
                    &sim.tuning,
                    &mut sim.rng,
                )
            } else {
                input.to_intent()
            }
        }
        ControlSource::Ai(profile) => ai::decide(
            profile,
            &sim.paddles[slot],
            &sim.ball,
            &sim.court,
            &sim.tuning,
            &mut sim.rng,
        ),
    }
}
