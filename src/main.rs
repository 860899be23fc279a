//! Sidescroll Quest headless driver
//!
//! Runs a scripted session against the simulation core and logs what
//! happens. Usage: `sidescroll-quest [config.json] [ticks] [seed]`.
//! Set `RUST_LOG=debug` to see jumps, landings and world shifts.

use std::path::Path;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use sidescroll_quest::consts::FRAME_DT;
use sidescroll_quest::sim::{GameState, SimEvent, TickInput, tick};
use sidescroll_quest::{SimConfig, StatKind, Stats};

const DEFAULT_TICKS: u64 = 600;
const DEFAULT_SEED: u64 = 12345;

/// Scripted player: holds a direction for a while, jumps now and then,
/// sweeps the pointer and earns experience.
struct ScriptedInput {
    rng: Pcg32,
    input: TickInput,
    hold_ticks: u32,
}

impl ScriptedInput {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            input: TickInput::default(),
            hold_ticks: 0,
        }
    }

    fn next_input(&mut self, config: &SimConfig) -> &TickInput {
        // One-shot inputs from the previous frame
        self.input.jump = false;
        self.input.xp_grants.clear();

        if self.hold_ticks == 0 {
            self.hold_ticks = self.rng.random_range(20..90);
            let dir = self.rng.random_range(0..3);
            self.input.left = dir == 0;
            self.input.right = dir == 1;
        }
        self.hold_ticks -= 1;

        if self.rng.random_bool(0.03) {
            self.input.jump = true;
        }
        if self.rng.random_bool(0.05) {
            self.input.xp_grants.push(self.rng.random_range(5..40));
        }

        self.input.pointer = Vec2::new(
            self.rng.random_range(0.0..config.screen_width),
            self.rng.random_range(0.0..config.screen_height),
        );

        &self.input
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load_or_default(Path::new(&path)),
        None => SimConfig::default(),
    };
    let ticks = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TICKS);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    log::info!("Sidescroll Quest (headless) starting: {ticks} ticks, seed {seed}");

    let mut state = GameState::new(config.clone(), Stats::default());
    let mut script = ScriptedInput::new(seed);

    for _ in 0..ticks {
        let input = script.next_input(&config);
        tick(&mut state, input, FRAME_DT);

        for event in state.drain_events() {
            match event {
                SimEvent::LevelUp { level, .. } => {
                    // Rotate new points through the stats
                    let mut allocation = state.progression.begin_allocation();
                    let kind = StatKind::ALL[(level as usize) % StatKind::ALL.len()];
                    if allocation.spend(kind) && state.progression.apply_allocation(&allocation) {
                        log::info!("Spent level {level} point on {}", kind.as_str());
                    }
                }
                other => log::trace!("{other:?}"),
            }
        }

        if state.time_ticks % 120 == 0 {
            log::info!(
                "tick {}: body ({:.1}, {:.1}) vel ({:.2}, {:.2}) shift {:.1} aim {:.1}°",
                state.time_ticks,
                state.body.rect.x(),
                state.body.rect.y(),
                state.body.vel.x,
                state.body.vel.y,
                state.arena.world_shift(),
                state.limb.angle
            );
        }
    }

    let stats = state.finish();
    for (label, value) in stats.sheet() {
        log::info!("{label} {value}");
    }
    match serde_json::to_string(&stats.to_record()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not encode stat record: {e}"),
    }
}
