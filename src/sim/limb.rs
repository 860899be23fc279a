//! Aiming limb attached to the body
//!
//! No physics of its own: every tick the anchor is re-derived from the host
//! position and the angle from the host center toward the pointer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::rect::Rect;
use crate::aim_angle_degrees;
use crate::settings::SimConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachedLimb {
    /// Aim angle in degrees, screen space (y down, so positive is clockwise)
    pub angle: f32,
    /// Where the limb attaches to the host
    pub anchor: Vec2,
    /// Unrotated limb size
    pub size: Vec2,
    /// Anchor offset as a fraction of host width/height
    anchor_frac: Vec2,
}

impl AttachedLimb {
    pub fn new(size: Vec2, anchor_frac: Vec2) -> Self {
        Self {
            angle: 0.0,
            anchor: Vec2::ZERO,
            size,
            anchor_frac,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(
            Vec2::new(config.limb_width, config.limb_height),
            config.limb_anchor,
        )
    }

    /// Recompute anchor and angle from the host and the pointer
    pub fn update(&mut self, host: &KinematicBody, pointer: Vec2, _dt: f32) {
        self.angle = aim_angle_degrees(host.center(), pointer);
        self.anchor = host.pos() + host.rect.size * self.anchor_frac;
    }

    /// Rotation for a renderer whose positive angles are counter-clockwise
    pub fn render_rotation(&self) -> f32 {
        -self.angle
    }

    /// Unrotated limb box with its top-left at the anchor
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.anchor,
            size: self.size,
        }
    }
}
