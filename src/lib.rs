//! Sidescroll Quest - platformer simulation core
//!
//! Core modules:
//! - `sim`: Frame-tick simulation (body kinematics, platform collision, camera scroll, aim limb)
//! - `progression`: Experience, level-ups and skill-point allocation
//! - `settings`: Tuning values threaded into the simulation constructors

pub mod progression;
pub mod settings;
pub mod sim;

pub use progression::{ProgressionModel, StatAllocation, StatKind, Stats};
pub use settings::SimConfig;

use glam::Vec2;

/// Default tuning constants (640x480 screen convention)
pub mod consts {
    /// Frame tick the driver runs at. Movement is per tick, not per second.
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Camera deadzone thresholds (screen-space x)
    pub const DEADZONE_LEFT: f32 = 120.0;
    pub const DEADZONE_RIGHT: f32 = 500.0;

    /// Gravity added to vertical velocity each tick while falling
    pub const GRAVITY: f32 = 0.35;
    /// Vertical velocity assigned when gravity kicks in from rest
    pub const INITIAL_FALL_SPEED: f32 = 1.0;
    /// Upward velocity assigned on jump
    pub const JUMP_IMPULSE: f32 = -8.0;
    /// How far below the body the jump probe looks for ground
    pub const JUMP_PROBE: f32 = 2.0;
    /// Horizontal speed while a direction is held
    pub const WALK_SPEED: f32 = 5.0;

    /// Body dimensions
    pub const BODY_WIDTH: f32 = 40.0;
    pub const BODY_HEIGHT: f32 = 60.0;

    /// Limb dimensions
    pub const LIMB_WIDTH: f32 = 60.0;
    pub const LIMB_HEIGHT: f32 = 10.0;
    /// Limb anchor as a fraction of host width/height
    pub const LIMB_ANCHOR_X: f32 = 0.5;
    pub const LIMB_ANCHOR_Y: f32 = 1.0 / 3.0;
}

/// Angle in degrees from `from` toward `to` (screen coordinates, y down)
#[inline]
pub fn aim_angle_degrees(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}
