//! ParticleStore - Structure of Arrays for every live particle
//!
//! Index `i` addresses the same particle in every array. Velocity is never
//! stored: it is `(x - px, y - py)` per tick, and systems write a new velocity
//! by moving the previous position.

use crate::core::Vec2;
use crate::domain::Region;

// Contact bits written by region classification
pub const CONTACT_BELOW: u8 = 1 << 0;
pub const CONTACT_ABOVE: u8 = 1 << 1;
pub const CONTACT_LEFT: u8 = 1 << 2;
pub const CONTACT_RIGHT: u8 = 1 << 3;
pub const CONTACT_FLOOR: u8 = 1 << 4;
pub const CONTACT_SIDES: u8 = CONTACT_BELOW | CONTACT_ABOVE | CONTACT_LEFT | CONTACT_RIGHT;

#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub px: Vec<f64>,
    pub py: Vec<f64>,
    pub r: Vec<f64>,
    pub plane: Vec<u8>,
    pub region: Vec<Region>,
    pub sleeping: Vec<u8>,        // 1 = asleep, skipped by integrate/collide
    pub calm_frames: Vec<u32>,    // consecutive calm steps while awake
    pub contacts: Vec<u8>,        // CONTACT_* bits from the last classification
    pub end_x: Vec<f64>,          // position at the end of the previous step
    pub end_y: Vec<f64>,

    population: Vec<usize>,
}

impl ParticleStore {
    pub fn new(plane_count: usize, capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            px: Vec::with_capacity(capacity),
            py: Vec::with_capacity(capacity),
            r: Vec::with_capacity(capacity),
            plane: Vec::with_capacity(capacity),
            region: Vec::with_capacity(capacity),
            sleeping: Vec::with_capacity(capacity),
            calm_frames: Vec::with_capacity(capacity),
            contacts: Vec::with_capacity(capacity),
            end_x: Vec::with_capacity(capacity),
            end_y: Vec::with_capacity(capacity),
            population: vec![0; plane_count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Live particles per plane
    #[inline]
    pub fn population(&self) -> &[usize] {
        &self.population
    }

    /// Append a particle; returns its index
    pub fn push(&mut self, pos: Vec2, prev: Vec2, r: f64, plane: u8) -> usize {
        let idx = self.len();
        self.x.push(pos.x);
        self.y.push(pos.y);
        self.px.push(prev.x);
        self.py.push(prev.y);
        self.r.push(r);
        self.plane.push(plane);
        self.region.push(Region::Air);
        self.sleeping.push(0);
        self.calm_frames.push(0);
        self.contacts.push(0);
        self.end_x.push(pos.x);
        self.end_y.push(pos.y);
        self.population[plane as usize] += 1;
        idx
    }

    // === Per-particle accessors ===

    #[inline]
    pub fn pos(&self, i: usize) -> Vec2 {
        Vec2::new(self.x[i], self.y[i])
    }

    #[inline]
    pub fn prev(&self, i: usize) -> Vec2 {
        Vec2::new(self.px[i], self.py[i])
    }

    /// Implied per-tick velocity
    #[inline]
    pub fn velocity(&self, i: usize) -> Vec2 {
        Vec2::new(self.x[i] - self.px[i], self.y[i] - self.py[i])
    }

    /// Encode a new per-tick velocity by moving the previous position
    #[inline]
    pub fn set_velocity(&mut self, i: usize, v: Vec2) {
        self.px[i] = self.x[i] - v.x;
        self.py[i] = self.y[i] - v.y;
    }

    #[inline]
    pub fn is_sleeping(&self, i: usize) -> bool {
        self.sleeping[i] != 0
    }

    #[inline]
    pub fn wake(&mut self, i: usize) {
        self.sleeping[i] = 0;
        self.calm_frames[i] = 0;
    }

    /// Freeze in place with zero implied velocity
    #[inline]
    pub fn put_to_sleep(&mut self, i: usize) {
        self.sleeping[i] = 1;
        self.px[i] = self.x[i];
        self.py[i] = self.y[i];
    }

    pub fn sleeping_count(&self) -> usize {
        self.sleeping.iter().filter(|&&s| s != 0).count()
    }

    /// Snapshot end-of-step positions (read by the next step's rest test)
    pub fn record_end_positions(&mut self) {
        self.end_x.copy_from_slice(&self.x);
        self.end_y.copy_from_slice(&self.y);
    }

    // === Raw pointers for JS interop ===

    pub fn x_ptr(&self) -> *const f64 {
        self.x.as_ptr()
    }

    pub fn y_ptr(&self) -> *const f64 {
        self.y.as_ptr()
    }

    pub fn r_ptr(&self) -> *const f64 {
        self.r.as_ptr()
    }

    pub fn plane_ptr(&self) -> *const u8 {
        self.plane.as_ptr()
    }

    pub fn region_ptr(&self) -> *const u8 {
        self.region.as_ptr() as *const u8
    }

    pub fn sleeping_ptr(&self) -> *const u8 {
        self.sleeping.as_ptr()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
