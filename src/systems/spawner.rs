//! Spawner - rate-controlled, per-plane budgeted particle creation

use crate::core::{Rng, Vec2};
use crate::domain::PileConfig;
use crate::spatial::ParticleStore;

// Spawn band above the container: base height plus a stagger per plane of depth
const SPAWN_BASE_OFFSET: f64 = 70.0;
const SPAWN_DEPTH_STAGGER: f64 = 18.0;
// Initial velocity jitter (units per second)
const SPAWN_JITTER_VX: f64 = 110.0;
const SPAWN_JITTER_VY: f64 = 70.0;
// Shapes the spawn rate so it tapers as the pile fills
const FILL_EASE_EXPONENT: f64 = 0.6;

/// Fractional emission budget per plane
#[derive(Clone, Debug)]
pub struct Spawner {
    accumulators: Vec<f64>,
}

impl Spawner {
    pub fn new(plane_count: usize) -> Self {
        Self { accumulators: vec![0.0; plane_count] }
    }

    pub fn accumulators(&self) -> &[f64] {
        &self.accumulators
    }

    /// Create one particle on `plane`. Returns false without touching any
    /// state when the global cap or the plane target is already reached.
    pub fn spawn_one(
        &self,
        store: &mut ParticleStore,
        rng: &mut Rng,
        config: &PileConfig,
        plane: usize,
    ) -> bool {
        if store.len() >= config.max_particles
            || store.population()[plane] >= config.plane_base_target[plane]
        {
            return false;
        }

        let planes = config.plane_count();
        let r = (config.radius_base + rng.next_f64() * config.radius_var)
            * config.plane_size_scale[plane];
        let sx = rng.next_f64() * config.width;
        let depth = (planes - 1 - plane) as f64;
        let sy = -r - rng.next_f64() * (SPAWN_BASE_OFFSET + depth * SPAWN_DEPTH_STAGGER);
        let vx = (rng.next_f64() - 0.5) * SPAWN_JITTER_VX;
        let vy = rng.next_f64() * SPAWN_JITTER_VY;

        let pos = Vec2::new(sx, sy);
        let prev = pos - Vec2::new(vx, vy) * config.fixed_dt;
        store.push(pos, prev, r, plane as u8);
        true
    }

    /// Advance the per-plane budgets by `dt`; returns how many particles spawned
    pub fn spawn_step(
        &mut self,
        store: &mut ParticleStore,
        rng: &mut Rng,
        config: &PileConfig,
        dt: f64,
    ) -> usize {
        let target = config.target_count();
        if store.len() >= target {
            return 0;
        }

        let fill = store.len() as f64 / target.max(1) as f64;
        let eased = (1.0 - fill.powf(FILL_EASE_EXPONENT)).max(0.0);
        let rate = config.spawn_rate_min + (config.spawn_rate_max - config.spawn_rate_min) * eased;

        let mut spawned = 0;
        for plane in 0..config.plane_count() {
            if store.population()[plane] >= config.plane_base_target[plane] {
                continue;
            }
            self.accumulators[plane] += rate * config.plane_spawn_weight[plane] * dt;
            while self.accumulators[plane] >= 1.0
                && store.len() < target
                && store.population()[plane] < config.plane_base_target[plane]
            {
                self.accumulators[plane] -= 1.0;
                if !self.spawn_one(store, rng, config, plane) {
                    break;
                }
                spawned += 1;
            }
        }
        spawned
    }
}

#[cfg(test)]
#[path = "tests/spawner_tests.rs"]
mod tests;
