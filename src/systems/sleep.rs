//! Sleep/Wake - region classification and settle detection
//!
//! Region comes from same-plane contacts within `contact_reach` of touching,
//! plus floor and wall contact:
//! - Air: nothing touching
//! - Interior: covered below, above, left and right, away from floor and walls
//! - Boundary: everything else (floor, walls, open surface of the pile)
//!
//! Awake particles resting on something are damped toward rest and fall asleep
//! after `interior_sleep_frames` calm steps in a row.

use serde::Serialize;

use crate::domain::{PileConfig, Region};
use crate::spatial::store::{
    CONTACT_ABOVE, CONTACT_BELOW, CONTACT_FLOOR, CONTACT_LEFT, CONTACT_RIGHT, CONTACT_SIDES,
};
use crate::spatial::{ParticleStore, SpatialHash};

// Distance from floor or wall that still counts as touching it
const SURFACE_TOLERANCE: f64 = 0.5;
// Direction thresholds as a fraction of centre distance
const SIDE_FRACTION: f64 = 0.2;
const ABOVE_FRACTION: f64 = 0.5;
const DIST_EPS: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepState {
    pub sleeping_count: usize,
    pub interior_count: usize,
    pub interior_sleeping_count: usize,
    pub boundary_count: usize,
    pub boundary_sleeping_count: usize,
    pub air_count: usize,
}

impl SleepState {
    pub fn collect(store: &ParticleStore) -> Self {
        let mut s = Self::default();
        for i in 0..store.len() {
            let asleep = store.is_sleeping(i);
            if asleep {
                s.sleeping_count += 1;
            }
            match store.region[i] {
                Region::Interior => {
                    s.interior_count += 1;
                    if asleep {
                        s.interior_sleeping_count += 1;
                    }
                }
                Region::Boundary => {
                    s.boundary_count += 1;
                    if asleep {
                        s.boundary_sleeping_count += 1;
                    }
                }
                Region::Air => s.air_count += 1,
            }
        }
        s
    }

    /// Share of interior particles asleep (1 when there are none)
    pub fn interior_sleep_ratio(&self) -> f64 {
        if self.interior_count == 0 {
            return 1.0;
        }
        self.interior_sleeping_count as f64 / self.interior_count as f64
    }
}

/// Recompute contact bits and region for every particle. Sleepers that end
/// up in the air or lose support from below are woken. Returns wake count.
pub fn classify_regions(store: &mut ParticleStore, hash: &SpatialHash, config: &PileConfig) -> usize {
    let width = config.width;
    let height = config.height;
    let mut woken = 0;

    for i in 0..store.len() {
        let (xi, yi, ri) = (store.x[i], store.y[i], store.r[i]);
        let mut bits = 0u8;
        let mut contacts = 0u32;

        let on_floor = yi >= height - ri - SURFACE_TOLERANCE;
        let at_left = xi <= ri + SURFACE_TOLERANCE;
        let at_right = xi >= width - ri - SURFACE_TOLERANCE;
        if on_floor {
            bits |= CONTACT_BELOW | CONTACT_FLOOR;
            contacts += 1;
        }
        if at_left {
            bits |= CONTACT_LEFT;
            contacts += 1;
        }
        if at_right {
            bits |= CONTACT_RIGHT;
            contacts += 1;
        }

        hash.for_each_candidate(xi, yi, store.plane[i] as usize, |j| {
            if j == i {
                return;
            }
            let dx = store.x[j] - xi;
            let dy = store.y[j] - yi;
            let reach = (ri + store.r[j]) * config.contact_reach;
            let d2 = dx * dx + dy * dy;
            if d2 >= reach * reach {
                return;
            }
            let d = d2.sqrt() + DIST_EPS;
            contacts += 1;
            if dy > SIDE_FRACTION * d {
                bits |= CONTACT_BELOW;
            }
            if dy < -ABOVE_FRACTION * d {
                bits |= CONTACT_ABOVE;
            }
            if dx < -SIDE_FRACTION * d {
                bits |= CONTACT_LEFT;
            }
            if dx > SIDE_FRACTION * d {
                bits |= CONTACT_RIGHT;
            }
        });

        store.contacts[i] = bits;
        store.region[i] = if contacts == 0 {
            Region::Air
        } else if bits & CONTACT_SIDES == CONTACT_SIDES && !on_floor && !at_left && !at_right {
            Region::Interior
        } else {
            Region::Boundary
        };

        if store.is_sleeping(i) && (store.region[i] == Region::Air || bits & CONTACT_BELOW == 0) {
            store.wake(i);
            woken += 1;
        }
    }
    woken
}

/// Settle bookkeeping for awake particles. Returns how many fell asleep.
pub fn update_sleep(store: &mut ParticleStore, config: &PileConfig) -> usize {
    let cutoff_sq = config.contact_vel_cutoff * config.contact_vel_cutoff;
    let surface_speed = config.interior_sleep_speed * config.surface_sleep_speed_mul;
    let mut slept = 0;

    for i in 0..store.len() {
        if store.is_sleeping(i) {
            continue;
        }
        let bits = store.contacts[i];
        let region = store.region[i];
        let supported = bits & CONTACT_BELOW != 0;

        if supported {
            // Small real displacement replaces the implied velocity, which
            // correction and bounce re-encoding can leave inflated
            let dx = store.x[i] - store.end_x[i];
            let dy = store.y[i] - store.end_y[i];
            if dx * dx + dy * dy < cutoff_sq {
                store.px[i] = store.end_x[i];
                store.py[i] = store.end_y[i];
            }
            if region != Region::Air && config.resting_contact_damp > 0.0 {
                let v = store.velocity(i);
                store.set_velocity(i, v * (1.0 - config.resting_contact_damp));
            }
        }

        let v = store.velocity(i);
        let calm = match region {
            Region::Interior => v.length() < config.interior_sleep_speed,
            Region::Boundary if bits & CONTACT_FLOOR != 0 => {
                v.x.abs() < config.floor_sleep_vx && v.y.abs() < config.floor_sleep_vy
            }
            Region::Boundary if supported => v.length() < surface_speed,
            _ => false,
        };

        if calm {
            store.calm_frames[i] += 1;
            if store.calm_frames[i] >= config.interior_sleep_frames {
                store.put_to_sleep(i);
                slept += 1;
            }
        } else {
            store.calm_frames[i] = 0;
        }
    }
    slept
}

#[cfg(test)]
#[path = "tests/sleep_tests.rs"]
mod tests;
