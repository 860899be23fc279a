//! Arena: the static platforms of a level plus the camera scroll offset
//!
//! Scrolling moves the platforms, never the body's coordinate frame, so
//! `world_shift` records how far the level has been translated so far.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::settings::{PlatformSpec, SimConfig};

/// A platform the body can stand on or bump into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    /// Same argument order as the level table: width, height, x, y
    pub fn new(width: f32, height: f32, x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }

    /// Per-tick hook. Platforms are static.
    pub fn update(&mut self) {}
}

impl From<&PlatformSpec> for Platform {
    fn from(spec: &PlatformSpec) -> Self {
        Self::new(spec.width, spec.height, spec.x, spec.y)
    }
}

/// Level layout and scroll state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arena {
    /// Platforms in insertion order (collision resolution depends on it)
    platforms: Vec<Platform>,
    /// Total horizontal translation applied so far
    world_shift: f32,
}

impl Arena {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self {
            platforms,
            world_shift: 0.0,
        }
    }

    /// Build the level described by the config
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.platforms.iter().map(Platform::from).collect())
    }

    /// Append a platform after the existing ones
    pub fn add_platform(&mut self, platform: Platform) {
        self.platforms.push(platform);
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Platform rectangles for the renderer, in insertion order
    pub fn platform_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.platforms.iter().map(|p| p.rect)
    }

    pub fn world_shift(&self) -> f32 {
        self.world_shift
    }

    /// Background parallax offset: the backdrop scrolls at a third of the level speed
    pub fn background_offset(&self) -> f32 {
        (self.world_shift / 3.0).floor()
    }

    /// Tick everything in the arena
    pub fn update(&mut self) {
        for platform in &mut self.platforms {
            platform.update();
        }
    }

    /// Scroll the level horizontally by `dx`
    pub fn shift_world(&mut self, dx: f32) {
        self.world_shift += dx;
        for platform in &mut self.platforms {
            platform.rect.pos.x += dx;
        }
    }
}
