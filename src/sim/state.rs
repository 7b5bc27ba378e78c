//! Match state and core simulation types
//!
//! Everything that must be persisted for snapshots/determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ai::AiProfile;
use super::court::{Court, Side};
use super::rally::RallyState;
use crate::tuning::Tuning;

/// Roster slots, fixed for the lifetime of a match.
/// Slot order is also the per-tick evaluation order.
pub const SLOT_HUMAN: usize = 0;
pub const SLOT_TEAMMATE: usize = 1;
pub const SLOT_PRIMARY: usize = 2;
pub const SLOT_SECONDARY: usize = 3;

/// Current phase of the match loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Menu/idle, no physics
    Start,
    /// One side preparing to serve; entities frozen at the serve formation
    Serve,
    /// Full physics active
    Play,
}

/// Skill states a paddle can be in. Each skill imparts a scripted ball
/// velocity when it fires; the state itself only blocks re-triggering and
/// selects an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skill {
    Idle,
    /// First touch: pop the ball up and slightly toward the net
    Bump,
    /// Second touch: straight vertical lift, arms a spike
    Set,
    /// Airborne smash toward the opponent's floor
    Spike,
    /// Net-front rejection back toward the blocker's own side
    Block,
}

impl Skill {
    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Idle => "idle",
            Skill::Bump => "bump",
            Skill::Set => "set",
            Skill::Spike => "spike",
            Skill::Block => "block",
        }
    }
}

/// Roster role; fixes the paddle's side and which heuristic drives it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Left front slot, driven by the host's input (or auto-pilot)
    Human,
    /// Left back slot, support AI on the human's side
    Teammate,
    /// Right front slot, the opposing captain (serves for its side)
    Primary,
    /// Right back slot, opposing backline support
    Secondary,
}

impl Role {
    #[inline]
    pub fn side(self) -> Side {
        match self {
            Role::Human | Role::Teammate => Side::Left,
            Role::Primary | Role::Secondary => Side::Right,
        }
    }
}

/// Where a paddle's per-tick decisions come from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ControlSource {
    /// Intent comes from the host's `TickInput`
    Human,
    /// Intent derived each tick from a role heuristic
    Ai(AiProfile),
}

/// One paddle's decision for one tick. Human input and AI heuristics both
/// produce this, so kinematics and skill code have a single path.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleIntent {
    /// Horizontal intent, scaled [-1, 1] (AI profiles run below full speed)
    pub move_x: f32,
    pub jump: bool,
    pub bump: bool,
    pub set: bool,
    pub spike: bool,
    pub block: bool,
}

/// A paddle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub role: Role,
    /// Fixed per role; paddles never change halves
    pub side: Side,
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    /// +1 facing the right wall, -1 the left (for sprite flipping)
    pub facing: f32,
    pub grounded: bool,
    /// Hitbox radius
    pub radius: f32,
    pub skill: Skill,
    /// Recovery ticks remaining; no skill can fire while > 0
    pub skill_timer: u32,
    /// Most recently fired skill (a spike requires it to have been a set)
    pub last_skill: Option<Skill>,
    pub can_spike: bool,
    /// Standing post the paddle returns to between rallies and when idle
    pub home_x: f32,
    /// Support-AI disengage countdown after its own counted touch
    pub touch_rest: u32,
    pub control: ControlSource,
}

impl Paddle {
    pub fn new(
        role: Role,
        control: ControlSource,
        home_x: f32,
        court: &Court,
        tuning: &Tuning,
    ) -> Self {
        let side = role.side();
        Self {
            role,
            side,
            pos: Vec2::new(home_x, court.ground_y - tuning.paddle_radius),
            vel: Vec2::ZERO,
            facing: side.outward_sign(),
            grounded: true,
            radius: tuning.paddle_radius,
            skill: Skill::Idle,
            skill_timer: 0,
            last_skill: None,
            can_spike: false,
            home_x,
            touch_rest: 0,
            control,
        }
    }

    #[inline]
    pub fn airborne(&self) -> bool {
        !self.grounded
    }

    /// Enter a skill state and start its recovery window
    pub fn fire_skill(&mut self, skill: Skill, recovery: u32) -> Skill {
        self.skill = skill;
        self.skill_timer = recovery;
        self.last_skill = Some(skill);
        skill
    }

    /// Put the paddle back on the ground at `x` with all rally state cleared
    pub fn reset_at(&mut self, x: f32, ground_y: f32) {
        self.pos = Vec2::new(x, ground_y - self.radius);
        self.vel = Vec2::ZERO;
        self.facing = self.side.outward_sign();
        self.grounded = true;
        self.skill = Skill::Idle;
        self.skill_timer = 0;
        self.last_skill = None;
        self.can_spike = false;
        self.touch_rest = 0;
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Discrete per-tick events for host effect/UI hooks.
/// Drained (read) by the host after each tick; cleared at the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A paddle fired a skill (animation/sound hook)
    SkillFired { paddle: usize, skill: Skill },
    /// A side won the rally
    Score { side: Side },
    /// Serve preparation began for a side
    ServeStart { side: Side },
}

/// Complete match simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSim {
    /// Match seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; serialized so snapshots resume identically
    pub rng: Pcg32,
    pub court: Court,
    pub tuning: Tuning,
    pub phase: MatchPhase,
    /// Side serving the current/next rally
    pub server: Side,
    /// Frames elapsed in the serve phase (drives AI auto-serve)
    pub serve_ticks: u32,
    /// Points this set, `[left, right]`
    pub score: [u16; 2],
    /// Completed sets won, `[left, right]`
    pub sets_won: [u8; 2],
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Fixed roster in slot order (see `SLOT_*`)
    pub paddles: [Paddle; 4],
    pub ball: Ball,
    pub rally: RallyState,
    /// Events raised during the most recent tick
    #[serde(skip)]
    pub events: Vec<MatchEvent>,
}

impl MatchSim {
    /// Create a match with default court and tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Court::default(), Tuning::default())
    }

    /// Create a match with explicit court geometry and balance data
    pub fn with_tuning(seed: u64, court: Court, tuning: Tuning) -> Self {
        let mid = court.mid_x();
        let paddles = [
            Paddle::new(
                Role::Human,
                ControlSource::Human,
                mid - tuning.front_post_offset,
                &court,
                &tuning,
            ),
            Paddle::new(
                Role::Teammate,
                ControlSource::Ai(AiProfile::teammate(&court, &tuning)),
                tuning.back_post_offset,
                &court,
                &tuning,
            ),
            Paddle::new(
                Role::Primary,
                ControlSource::Ai(AiProfile::primary(&court, &tuning)),
                mid + tuning.front_post_offset,
                &court,
                &tuning,
            ),
            Paddle::new(
                Role::Secondary,
                ControlSource::Ai(AiProfile::secondary(&court, &tuning)),
                court.width - tuning.back_post_offset,
                &court,
                &tuning,
            ),
        ];
        let ball = Ball {
            pos: Vec2::new(mid, court.ground_y - 128.0),
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
        };
        let ball_side = court.side_of(ball.pos.x);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            court,
            tuning,
            phase: MatchPhase::Start,
            server: Side::Left,
            serve_ticks: 0,
            score: [0, 0],
            sets_won: [0, 0],
            time_ticks: 0,
            paddles,
            ball,
            rally: RallyState::new(ball_side),
            events: Vec::new(),
        }
    }

    /// Rebuild in place from the stored seed and tuning (back to `Start`)
    pub fn reset(&mut self) {
        *self = Self::with_tuning(self.seed, self.court.clone(), self.tuning.clone());
    }

    /// `Start -> Serve` with the current server (left for a fresh match)
    pub fn begin_match(&mut self) {
        self.enter_serve(self.server);
    }

    /// Roster slot that serves for a side (the side's front-court captain)
    pub fn server_slot(&self, side: Side) -> usize {
        match side {
            Side::Left => SLOT_HUMAN,
            Side::Right => SLOT_PRIMARY,
        }
    }

    /// Reset the formation for a new rally: everyone to their posts, the
    /// server to its serve stance with the ball held in front of it.
    /// Score and server identity persist; only positions and rally state
    /// reset here.
    pub fn enter_serve(&mut self, server: Side) {
        self.phase = MatchPhase::Serve;
        self.server = server;
        self.serve_ticks = 0;

        let ground_y = self.court.ground_y;
        for paddle in &mut self.paddles {
            let post = paddle.home_x;
            paddle.reset_at(post, ground_y);
        }

        let slot = self.server_slot(server);
        let stance_x = self.court.back_wall_x(server)
            + server.outward_sign() * self.tuning.serve_back_offset;
        self.paddles[slot].reset_at(stance_x, ground_y);

        let srv = &self.paddles[slot];
        self.ball.pos = Vec2::new(
            srv.pos.x + server.outward_sign() * self.tuning.serve_ball_dx,
            srv.pos.y - self.tuning.serve_ball_dy,
        );
        self.ball.vel = Vec2::ZERO;

        self.rally.reset_for_serve(server);
        self.events.push(MatchEvent::ServeStart { side: server });
    }

    /// The serving action: toss the ball toward the opponent and open play
    pub fn launch_serve(&mut self) {
        let out = self.server.outward_sign();
        self.ball.vel = Vec2::new(out * self.tuning.serve_push, -self.tuning.serve_lift);
        self.phase = MatchPhase::Play;
    }

    /// End the rally in `side`'s favor: score it, roll the set over at the
    /// target, and hand `side` the next serve.
    pub fn award_point(&mut self, side: Side) {
        self.score[side.index()] += 1;
        self.events.push(MatchEvent::Score { side });
        if self.score[side.index()] >= self.tuning.set_target {
            self.sets_won[side.index()] += 1;
            self.score = [0, 0];
        }
        self.enter_serve(side);
    }
}
