//! Frame tick
//!
//! One call per rendered frame: apply input, move the body, re-aim the limb,
//! then let the camera scroll the arena.

use glam::Vec2;

use super::state::{GameState, SimEvent};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left direction key held
    pub left: bool,
    /// Right direction key held
    pub right: bool,
    /// Jump pressed this frame (one-shot, the driver clears it)
    pub jump: bool,
    /// Pointer position in screen space
    pub pointer: Vec2,
    /// Experience granted since the last tick
    pub xp_grants: Vec<u32>,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    for &amount in &input.xp_grants {
        if let Some(level) = state.progression.add_experience(amount) {
            state.events.push(SimEvent::LevelUp {
                level,
                xp_needed: state.progression.stats().xp_needed,
            });
        }
    }

    // Horizontal intent from the held keys. With both held the direction
    // pressed last keeps going.
    match (input.left, input.right) {
        (true, false) => state.body.go_left(dt),
        (false, true) => state.body.go_right(dt),
        (false, false) => state.body.stop(),
        (true, true) => {}
    }

    if input.jump && state.body.jump(&state.arena) {
        log::debug!("Jump at ({:.1}, {:.1})", state.body.rect.x(), state.body.rect.y());
        state.events.push(SimEvent::Jumped);
    }

    let was_falling = state.body.vel.y > 0.0;
    let step = state.body.update(&state.arena, dt);
    if was_falling && (step.landed() || step.on_floor) {
        state.events.push(SimEvent::Landed);
    }
    if step.hit_ceiling() {
        state.events.push(SimEvent::HitCeiling);
    }

    state.limb.update(&state.body, input.pointer, dt);

    let dx = state.camera.follow(&mut state.body, &mut state.arena);
    if dx != 0.0 {
        // The camera moved the body back; the limb stays attached to it
        state.limb.anchor.x += dx;
        log::debug!("World shifted by {dx:.1} (total {:.1})", state.arena.world_shift());
        state.events.push(SimEvent::WorldShifted { dx });
    }

    state.arena.update();
}
