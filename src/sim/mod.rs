//! Frame-tick simulation module
//!
//! All movement logic lives here. This module must stay pure:
//! - One `tick` per rendered frame, fixed per-tick velocities
//! - Stable iteration order (platforms in insertion order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod body;
pub mod camera;
pub mod collision;
pub mod limb;
pub mod rect;
pub mod state;
pub mod tick;

pub use arena::{Arena, Platform};
pub use body::{BodyStep, BodyTuning, KinematicBody};
pub use camera::Camera;
pub use collision::{CollisionResult, resolve_horizontal, resolve_vertical};
pub use limb::AttachedLimb;
pub use rect::Rect;
pub use state::{GameState, SimEvent};
pub use tick::{TickInput, tick};
