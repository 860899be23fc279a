//! Player-controlled kinematic body
//!
//! Velocity is advanced by fixed per-tick amounts. The `dt` passed to
//! `update` and the movement calls is accepted but not used to scale
//! anything, so motion is tied to the tick rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::collision::{CollisionResult, any_overlap, resolve_horizontal, resolve_vertical};
use super::rect::Rect;
use crate::settings::SimConfig;

/// Per-tick movement tuning copied out of the config
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyTuning {
    pub gravity: f32,
    pub initial_fall_speed: f32,
    pub jump_impulse: f32,
    pub jump_probe: f32,
    pub walk_speed: f32,
    /// y of the screen floor
    pub floor_y: f32,
}

impl From<&SimConfig> for BodyTuning {
    fn from(config: &SimConfig) -> Self {
        Self {
            gravity: config.gravity,
            initial_fall_speed: config.initial_fall_speed,
            jump_impulse: config.jump_impulse,
            jump_probe: config.jump_probe,
            walk_speed: config.walk_speed,
            floor_y: config.floor_y(),
        }
    }
}

/// What happened during one `update`
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStep {
    pub horizontal: CollisionResult,
    pub vertical: CollisionResult,
    /// Gravity snapped the body onto the screen floor this tick
    pub on_floor: bool,
}

impl BodyStep {
    /// Came down onto a platform
    pub fn landed(&self) -> bool {
        self.vertical.normal == Vec2::NEG_Y
    }

    /// Bumped the underside of a platform
    pub fn hit_ceiling(&self) -> bool {
        self.vertical.normal == Vec2::Y
    }
}

/// A moving rectangle with velocity and gravity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinematicBody {
    pub rect: Rect,
    pub vel: Vec2,
    tuning: BodyTuning,
}

impl KinematicBody {
    pub fn new(rect: Rect, tuning: BodyTuning) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
            tuning,
        }
    }

    /// Body at the configured spawn point
    pub fn from_config(config: &SimConfig) -> Self {
        let rect = Rect::new(
            config.spawn.x,
            config.spawn.y,
            config.body_width,
            config.body_height,
        );
        Self::new(rect, BodyTuning::from(config))
    }

    pub fn tuning(&self) -> &BodyTuning {
        &self.tuning
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.rect.pos
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Resting y when standing on the screen floor
    fn floor_top(&self) -> f32 {
        self.tuning.floor_y - self.rect.height()
    }

    /// Advance one tick: gravity, then move and resolve x, then move and resolve y
    pub fn update(&mut self, arena: &Arena, _dt: f32) -> BodyStep {
        let on_floor = self.apply_gravity();

        self.rect.pos.x += self.vel.x;
        let horizontal = resolve_horizontal(&mut self.rect, self.vel.x, arena.platforms());

        self.rect.pos.y += self.vel.y;
        let vertical = resolve_vertical(&mut self.rect, self.vel.y, arena.platforms());
        if vertical.hit {
            self.vel.y = 0.0;
        }

        BodyStep {
            horizontal,
            vertical,
            on_floor,
        }
    }

    /// Gravity integration. Returns true when the body was snapped to the floor.
    fn apply_gravity(&mut self) -> bool {
        if self.vel.y == 0.0 {
            self.vel.y = self.tuning.initial_fall_speed;
        } else {
            self.vel.y += self.tuning.gravity;
        }

        let floor_top = self.floor_top();
        if self.rect.y() >= floor_top && self.vel.y >= 0.0 {
            self.vel.y = 0.0;
            self.rect.pos.y = floor_top;
            return true;
        }
        false
    }

    /// Standing on a platform or the screen floor
    pub fn is_grounded(&self, arena: &Arena) -> bool {
        let probe = self.rect.translated(Vec2::new(0.0, self.tuning.jump_probe));
        any_overlap(&probe, arena.platforms()) || self.rect.bottom() >= self.tuning.floor_y
    }

    /// Jump if grounded. Returns whether the impulse was applied.
    pub fn jump(&mut self, arena: &Arena) -> bool {
        if self.is_grounded(arena) {
            self.vel.y = self.tuning.jump_impulse;
            true
        } else {
            false
        }
    }

    pub fn go_left(&mut self, _dt: f32) {
        self.vel.x = -self.tuning.walk_speed;
    }

    pub fn go_right(&mut self, _dt: f32) {
        self.vel.x = self.tuning.walk_speed;
    }

    pub fn stop(&mut self) {
        self.vel.x = 0.0;
    }
}
