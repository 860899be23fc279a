//! Axis-aligned rectangle geometry for bodies and platforms
//!
//! Screen coordinates: origin top-left, y grows downward.
//! - pos: top-left corner
//! - size: width/height

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Move so the left edge sits at `x`
    #[inline]
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    /// Move so the right edge sits at `x`
    #[inline]
    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    /// Move so the top edge sits at `y`
    #[inline]
    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y;
    }

    /// Move so the bottom edge sits at `y`
    #[inline]
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Copy of this rect moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    /// Strict overlap test. Rects that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
