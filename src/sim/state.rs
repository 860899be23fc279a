//! Session state: owns the arena, body, limb, camera and progression
//!
//! Everything a renderer or store reads between ticks lives here.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::KinematicBody;
use super::camera::Camera;
use super::limb::AttachedLimb;
use crate::progression::{ProgressionModel, Stats};
use crate::settings::SimConfig;

/// Things that happened during a tick, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Jump impulse applied
    Jumped,
    /// Came down onto a platform
    Landed,
    /// Bumped the underside of a platform
    HitCeiling,
    /// Camera scrolled the arena by `dx`
    WorldShifted { dx: f32 },
    /// Experience grant crossed the threshold
    LevelUp { level: u32, xp_needed: u32 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: SimConfig,
    pub arena: Arena,
    pub body: KinematicBody,
    pub limb: AttachedLimb,
    pub camera: Camera,
    pub progression: ProgressionModel,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl GameState {
    /// Start a session with the given stat record
    pub fn new(config: SimConfig, stats: Stats) -> Self {
        let arena = Arena::from_config(&config);
        let body = KinematicBody::from_config(&config);
        let limb = AttachedLimb::from_config(&config);
        let camera = Camera::from_config(&config);

        log::info!(
            "Session started: {} platforms, level {}",
            arena.platforms().len(),
            stats.level
        );

        Self {
            config,
            arena,
            body,
            limb,
            camera,
            progression: ProgressionModel::new(stats),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn stats(&self) -> &Stats {
        self.progression.stats()
    }

    /// Take this tick's events
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// End the session, handing the stat record back for persistence
    pub fn finish(self) -> Stats {
        log::info!("Session ended after {} ticks", self.time_ticks);
        self.progression.into_stats()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(SimConfig::default(), Stats::default())
    }
}
