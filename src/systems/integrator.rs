//! Integrator - damped Verlet with gravity and the pointer disturbance field

use crate::core::Vec2;
use crate::domain::PileConfig;
use crate::spatial::ParticleStore;

// Share of the pointer's own velocity blended in (inner disc / outer ring)
const POINTER_DRAG_INNER: f64 = 0.13;
const POINTER_DRAG_OUTER: f64 = 0.09;
// Outer ring push relative to the inner disc
const OUTER_PUSH_SCALE: f64 = 0.62;
// Per-step decay of pointer velocity
const POINTER_DECAY: f64 = 0.82;
const POINTER_DIST_EPS: f64 = 1e-4;

/// Host pointer state. External input, not configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub active: bool,
}

impl Pointer {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, ..Self::default() }
    }

    pub fn set(&mut self, x: f64, y: f64, vx: f64, vy: f64, active: bool) {
        *self = Self { x, y, vx, vy, active };
    }

    /// Deactivate and drop any residual velocity; position is kept
    pub fn clear(&mut self) {
        self.active = false;
        self.vx = 0.0;
        self.vy = 0.0;
    }

    #[inline]
    pub fn decay(&mut self) {
        self.vx *= POINTER_DECAY;
        self.vy *= POINTER_DECAY;
    }
}

/// Advance every awake particle by one tick. Sleepers inside the pointer's
/// wake radius are woken and integrated; other sleepers are skipped. The push
/// only reaches the outer ring, which can be narrower than the wake radius.
/// Returns the number of sleepers woken by the pointer.
pub fn integrate(store: &mut ParticleStore, config: &PileConfig, pointer: &Pointer, dt: f64) -> usize {
    let inner = config.mouse_radius;
    let outer = inner * config.mouse_wake_radius_mul;
    let wake = inner * config.wake_cursor_radius_mul;
    let gravity_step = config.gravity * dt * dt;
    let pointer_pos = Vec2::new(pointer.x, pointer.y);
    let pointer_vel = Vec2::new(pointer.vx, pointer.vy);
    let mut woken = 0;

    for i in 0..store.len() {
        let pos = store.pos(i);
        let offset = pos - pointer_pos;
        let d2 = offset.length_squared();
        let near = pointer.active && d2 < outer * outer;

        if store.is_sleeping(i) {
            if !(pointer.active && d2 < wake * wake) {
                continue;
            }
            store.wake(i);
            woken += 1;
        }

        let plane = store.plane[i] as usize;
        let mut v = store.velocity(i) * config.velocity_damping;

        if near {
            let dist = d2.sqrt() + POINTER_DIST_EPS;
            let normal = offset * (1.0 / dist);
            let influence = config.plane_mouse_influence[plane];
            let (push, drag) = if d2 < inner * inner {
                ((1.0 - dist / inner) * config.mouse_push, POINTER_DRAG_INNER)
            } else {
                ((1.0 - dist / outer) * config.mouse_push * OUTER_PUSH_SCALE, POINTER_DRAG_OUTER)
            };
            v = v + (normal * (push * dt) + pointer_vel * drag) * influence;
        }

        store.px[i] = pos.x;
        store.py[i] = pos.y;
        store.x[i] = pos.x + v.x;
        store.y[i] = pos.y + v.y + gravity_step * config.plane_gravity_scale[plane];
    }
    woken
}

#[cfg(test)]
#[path = "tests/integrator_tests.rs"]
mod tests;
