//! Collision detection and response against static platforms
//!
//! Each axis is moved and resolved on its own. Overlapping platforms are
//! visited in arena order and every one clamps the body, so when several
//! overlap on the same axis the last one in the list decides the final edge.

use glam::Vec2;

use super::arena::Platform;
use super::rect::Rect;

/// Result of resolving one axis
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResult {
    /// Whether any platform overlapped after the move
    pub hit: bool,
    /// Number of overlapping platforms
    pub contacts: usize,
    /// Surface normal of the clamp applied (zero when the body was not moving on this axis)
    pub normal: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            contacts: 0,
            normal: Vec2::ZERO,
        }
    }
}

/// Platforms overlapping `rect`, in arena order
pub fn overlapping<'a>(
    rect: &'a Rect,
    platforms: &'a [Platform],
) -> impl Iterator<Item = &'a Platform> + 'a {
    platforms.iter().filter(move |p| rect.overlaps(&p.rect))
}

/// True if `rect` overlaps any platform
pub fn any_overlap(rect: &Rect, platforms: &[Platform]) -> bool {
    platforms.iter().any(|p| rect.overlaps(&p.rect))
}

/// Clamp a body that just moved horizontally by `vx` out of the platforms it overlaps
///
/// Moving right pins the right edge to the platform's left edge, moving left
/// pins the left edge to the platform's right edge.
pub fn resolve_horizontal(body: &mut Rect, vx: f32, platforms: &[Platform]) -> CollisionResult {
    // The hit list is taken before any clamp, like a single sprite-collide pass
    let hits: Vec<Rect> = overlapping(body, platforms).map(|p| p.rect).collect();
    if hits.is_empty() {
        return CollisionResult::miss();
    }

    let mut normal = Vec2::ZERO;
    for block in &hits {
        if vx > 0.0 {
            body.set_right(block.left());
            normal = Vec2::NEG_X;
        } else if vx < 0.0 {
            body.set_left(block.right());
            normal = Vec2::X;
        }
    }

    CollisionResult {
        hit: true,
        contacts: hits.len(),
        normal,
    }
}

/// Clamp a body that just moved vertically by `vy` out of the platforms it overlaps
///
/// Falling pins the bottom edge to the platform's top, rising pins the top
/// edge to the platform's bottom. The caller zeroes vertical velocity on a hit.
pub fn resolve_vertical(body: &mut Rect, vy: f32, platforms: &[Platform]) -> CollisionResult {
    let hits: Vec<Rect> = overlapping(body, platforms).map(|p| p.rect).collect();
    if hits.is_empty() {
        return CollisionResult::miss();
    }

    let mut normal = Vec2::ZERO;
    for block in &hits {
        if vy > 0.0 {
            body.set_bottom(block.top());
            normal = Vec2::NEG_Y;
        } else if vy < 0.0 {
            body.set_top(block.bottom());
            normal = Vec2::Y;
        }
    }

    CollisionResult {
        hit: true,
        contacts: hits.len(),
        normal,
    }
}
