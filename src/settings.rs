//! Simulation configuration
//!
//! Screen size, deadzone thresholds and movement tuning live here instead of
//! in module globals, so the body, arena and camera can be built for any
//! screen. Persisted as JSON; missing fields take their defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A platform in the level table: `[width, height, x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl PlatformSpec {
    pub const fn new(width: f32, height: f32, x: f32, y: f32) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }
}

/// The starter level
pub const DEFAULT_LEVEL: [PlatformSpec; 4] = [
    PlatformSpec::new(210.0, 70.0, 500.0, 500.0),
    PlatformSpec::new(210.0, 70.0, 800.0, 400.0),
    PlatformSpec::new(210.0, 70.0, 1000.0, 500.0),
    PlatformSpec::new(210.0, 70.0, 1120.0, 280.0),
];

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Camera ===
    /// Left edge at or below this scrolls the world right
    pub deadzone_left: f32,
    /// Right edge at or above this scrolls the world left
    pub deadzone_right: f32,

    // === Movement (per tick) ===
    pub gravity: f32,
    pub initial_fall_speed: f32,
    pub jump_impulse: f32,
    pub jump_probe: f32,
    pub walk_speed: f32,

    // === Body ===
    pub body_width: f32,
    pub body_height: f32,
    /// Top-left corner the body starts at
    pub spawn: Vec2,

    // === Limb ===
    pub limb_width: f32,
    pub limb_height: f32,
    /// Anchor offset as a fraction of the host's width/height
    pub limb_anchor: Vec2,

    // === Level ===
    pub platforms: Vec<PlatformSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            deadzone_left: DEADZONE_LEFT,
            deadzone_right: DEADZONE_RIGHT,

            gravity: GRAVITY,
            initial_fall_speed: INITIAL_FALL_SPEED,
            jump_impulse: JUMP_IMPULSE,
            jump_probe: JUMP_PROBE,
            walk_speed: WALK_SPEED,

            body_width: BODY_WIDTH,
            body_height: BODY_HEIGHT,
            spawn: Vec2::new(SCREEN_WIDTH / 2.0, 200.0),

            limb_width: LIMB_WIDTH,
            limb_height: LIMB_HEIGHT,
            limb_anchor: Vec2::new(LIMB_ANCHOR_X, LIMB_ANCHOR_Y),

            platforms: DEFAULT_LEVEL.to_vec(),
        }
    }
}

impl SimConfig {
    /// Floor line the body rests on when no platform is below it
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.screen_height
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Load a config file, falling back to defaults when it is missing or malformed
    pub fn load_or_default(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read config {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Invalid config {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Replace degenerate values with defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            log::warn!(
                "Screen size {}x{} is not positive; using {}x{}",
                self.screen_width,
                self.screen_height,
                defaults.screen_width,
                defaults.screen_height
            );
            self.screen_width = defaults.screen_width;
            self.screen_height = defaults.screen_height;
        }
        if self.body_width <= 0.0 || self.body_height <= 0.0 {
            log::warn!("Body size is not positive; using defaults");
            self.body_width = defaults.body_width;
            self.body_height = defaults.body_height;
        }
        // Deadzone must be wider than the body or both thresholds can fire at once
        if self.deadzone_right - self.deadzone_left <= self.body_width {
            log::warn!(
                "Deadzone {}..{} is narrower than the body; using defaults",
                self.deadzone_left,
                self.deadzone_right
            );
            self.deadzone_left = defaults.deadzone_left;
            self.deadzone_right = defaults.deadzone_right;
        }
        if self.walk_speed < 0.0 {
            log::warn!("Walk speed {} is negative; using {}", self.walk_speed, -self.walk_speed);
            self.walk_speed = -self.walk_speed;
        }
        let before = self.platforms.len();
        self.platforms.retain(|p| p.width > 0.0 && p.height > 0.0);
        if self.platforms.len() < before {
            log::warn!(
                "Dropped {} platforms with no area",
                before - self.platforms.len()
            );
        }

        self
    }
}
