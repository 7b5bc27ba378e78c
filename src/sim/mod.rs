//! Deterministic match simulation
//!
//! Every gameplay rule lives here, and a match must replay identically
//! from its seed:
//! - Fixed 60 Hz timestep, no wall-clock reads
//! - All randomness drawn from the seeded match RNG
//! - Paddles always evaluated in roster-slot order
//! - No rendering, audio, or platform dependencies

pub mod ai;
pub mod collision;
pub mod court;
pub mod kinematics;
pub mod rally;
pub mod skills;
pub mod state;
pub mod tick;

pub use ai::{AiProfile, AiStyle};
pub use collision::GroundOutcome;
pub use court::{Court, Side};
pub use rally::{RallyState, TOUCH_LIMIT};
pub use state::{
    Ball, ControlSource, MatchEvent, MatchPhase, MatchSim, Paddle, PaddleIntent, Role, SLOT_HUMAN,
    SLOT_PRIMARY, SLOT_SECONDARY, SLOT_TEAMMATE, Skill,
};
pub use tick::{TickInput, tick};
