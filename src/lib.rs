//! Pixel Volley - side-view 2v2 arcade volleyball
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, rally rules, AI, match flow)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio, and input wiring are host concerns: a host feeds a
//! [`sim::TickInput`] into [`sim::tick`] once per fixed step and reads the
//! resulting [`sim::MatchSim`] state and events back out.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Simulation timing constants
pub mod consts {
    /// Simulation tick rate (one tick per 60 Hz frame)
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep for host accumulator loops
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
