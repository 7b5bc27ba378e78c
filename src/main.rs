//! Pixel Volley entry point
//!
//! Headless demo runner: plays a seeded auto-pilot match for a fixed number
//! of ticks, logs rally events, and prints a JSON summary. Useful for
//! balance checks and for replaying a seed that produced odd behavior.
//!
//! Usage: `pixel-volley [SEED] [TICKS]`

use pixel_volley::consts::TICK_HZ;
use pixel_volley::sim::{MatchEvent, MatchSim, Side, TickInput, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xB0BA);
    let max_ticks: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3 * 60 * TICK_HZ as u64);

    log::info!("Pixel Volley demo: seed {seed}, {max_ticks} ticks");

    let mut sim = MatchSim::new(seed);
    let mut input = TickInput {
        start: true,
        auto_pilot: true,
        ..Default::default()
    };

    let mut rallies = 0u32;
    for _ in 0..max_ticks {
        tick(&mut sim, &input);
        // One-shot actions are cleared once consumed
        input.start = false;

        for event in &sim.events {
            match *event {
                MatchEvent::Score { side } => {
                    rallies += 1;
                    let name = match side {
                        Side::Left => "left",
                        Side::Right => "right",
                    };
                    log::info!(
                        "point to {name} | score {}-{} | sets {}-{}",
                        sim.score[0],
                        sim.score[1],
                        sim.sets_won[0],
                        sim.sets_won[1]
                    );
                }
                MatchEvent::ServeStart { side } => {
                    log::debug!("serve: {side:?}");
                }
                MatchEvent::SkillFired { paddle, skill } => {
                    log::debug!("paddle {paddle} fired {}", skill.as_str());
                }
            }
        }
    }

    log::info!("finished after {} ticks, {rallies} rallies", sim.time_ticks);

    let summary = serde_json::json!({
        "seed": seed,
        "ticks": sim.time_ticks,
        "rallies": rallies,
        "score": sim.score,
        "sets_won": sim.sets_won,
        "phase": format!("{:?}", sim.phase),
        "server": format!("{:?}", sim.server),
    });
    println!("{summary}");
}
