//! Camera deadzone: keeps the body between two screen-space thresholds by
//! scrolling the arena instead of letting the body leave the deadzone.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::KinematicBody;
use crate::settings::SimConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Left edge at or below this scrolls the world right
    pub left: f32,
    /// Right edge at or above this scrolls the world left
    pub right: f32,
}

impl Camera {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.deadzone_left, config.deadzone_right)
    }

    /// Clamp the body into the deadzone and scroll the arena by the overshoot.
    ///
    /// Returns the total shift applied this call (0 when the body was inside).
    pub fn follow(&self, body: &mut KinematicBody, arena: &mut Arena) -> f32 {
        let mut shifted = 0.0;

        if body.rect.right() >= self.right {
            let diff = body.rect.right() - self.right;
            body.rect.set_right(self.right);
            arena.shift_world(-diff);
            shifted -= diff;
        }

        if body.rect.left() <= self.left {
            let diff = self.left - body.rect.left();
            body.rect.set_left(self.left);
            arena.shift_world(diff);
            shifted += diff;
        }

        shifted
    }
}
