//! Collision - broad phase + soft pairwise contacts + container walls
//!
//! Planes never interact: the hash keys by plane and `resolve_pair` checks
//! again, so no correction or impulse ever crosses planes.

use crate::core::Vec2;
use crate::domain::PileConfig;
use crate::spatial::{ParticleStore, SpatialHash};

const COINCIDENT_EPS_SQ: f64 = 1e-6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pair_tests: u32,
    pub wakes: u32,
}

/// Rebuild the hash, then run `collision_passes` relaxation passes over all
/// awake particles. Each unordered pair is resolved once per pass, from
/// whichever side is visited awake first; pairs with a sleeper are resolved
/// from the awake side.
pub fn solve(store: &mut ParticleStore, hash: &mut SpatialHash, config: &PileConfig) -> CollisionStats {
    hash.build(store);
    let mut stats = CollisionStats::default();
    // visited[j]: j already resolved its contacts this pass. A sleeper woken
    // after its own turn stays unvisited so later particles still reach it.
    let mut visited = vec![false; store.len()];

    for _ in 0..config.collision_passes {
        visited.fill(false);
        for i in 0..store.len() {
            if store.is_sleeping(i) {
                continue;
            }
            visited[i] = true;
            let (x, y, plane) = (store.x[i], store.y[i], store.plane[i] as usize);
            hash.for_each_candidate(x, y, plane, |j| {
                if j == i || visited[j] {
                    return;
                }
                stats.pair_tests += 1;
                if resolve_pair(store, config, i, j) {
                    stats.wakes += 1;
                }
            });
            resolve_boundary(store, config, i);
        }
    }

    // Later contacts in the last pass can push an earlier particle back out
    for i in 0..store.len() {
        if !store.is_sleeping(i) {
            resolve_boundary(store, config, i);
        }
    }
    stats
}

/// Resolve one contact. Returns true if it woke a sleeper.
///
/// Both sides get the symmetric soft correction and normal impulse. A sleeper
/// that is not woken by the contact keeps its frozen state: it absorbs its half
/// and the awake partner only sees its own half.
pub fn resolve_pair(store: &mut ParticleStore, config: &PileConfig, a: usize, b: usize) -> bool {
    if store.plane[a] != store.plane[b] {
        return false;
    }
    let delta = store.pos(b) - store.pos(a);
    let min_dist = store.r[a] + store.r[b];
    let d2 = delta.length_squared();
    if d2 <= COINCIDENT_EPS_SQ || d2 >= min_dist * min_dist {
        return false;
    }
    let dist = d2.sqrt();
    let overlap = min_dist - dist;
    if overlap <= config.contact_slop {
        return false;
    }
    let n = delta * (1.0 / dist);

    let mut a_asleep = store.is_sleeping(a);
    let mut b_asleep = store.is_sleeping(b);
    let frozen_a = (store.pos(a), store.prev(a));
    let frozen_b = (store.pos(b), store.prev(b));

    // Positional correction
    let corr = n * ((overlap - config.contact_slop) * config.position_correction);
    store.x[a] -= corr.x;
    store.y[a] -= corr.y;
    store.x[b] += corr.x;
    store.y[b] += corr.y;

    // Normal response on the corrected velocities
    let va = store.velocity(a);
    let vb = store.velocity(b);
    let rel_n = (vb - va).dot(n);
    let impulse = -(1.0 + config.restitution) * rel_n * 0.5;

    let mut woke = false;
    if (a_asleep || b_asleep)
        && (overlap / min_dist > config.wake_overlap_ratio || impulse > config.wake_impulse)
    {
        if a_asleep {
            store.wake(a);
        }
        if b_asleep {
            store.wake(b);
        }
        a_asleep = false;
        b_asleep = false;
        woke = true;
    }

    if rel_n < 0.0 {
        store.set_velocity(a, va - n * impulse);
        store.set_velocity(b, vb + n * impulse);
    }

    if config.contact_tangent_damp > 0.0 {
        let t = n.perp();
        let rel_t = (store.velocity(b) - store.velocity(a)).dot(t);
        let j = t * (rel_t * config.contact_tangent_damp * 0.5);
        store.px[a] -= j.x;
        store.py[a] -= j.y;
        store.px[b] += j.x;
        store.py[b] += j.y;
    }

    if a_asleep {
        restore(store, a, frozen_a);
    }
    if b_asleep {
        restore(store, b, frozen_b);
    }
    woke
}

#[inline]
fn restore(store: &mut ParticleStore, i: usize, (pos, prev): (Vec2, Vec2)) {
    store.x[i] = pos.x;
    store.y[i] = pos.y;
    store.px[i] = prev.x;
    store.py[i] = prev.y;
}

/// Clamp into the container. Walls reflect vx by restitution; the floor keeps
/// `floor_friction` of vx and reflects vy by restitution.
pub fn resolve_boundary(store: &mut ParticleStore, config: &PileConfig, i: usize) {
    let r = store.r[i];
    let right = config.width - r;
    let floor = config.height - r;

    if store.x[i] < r {
        let vx = store.x[i] - store.px[i];
        store.x[i] = r;
        store.px[i] = r + vx * config.restitution;
    } else if store.x[i] > right {
        let vx = store.x[i] - store.px[i];
        store.x[i] = right;
        store.px[i] = right + vx * config.restitution;
    }

    if store.y[i] > floor {
        let v = store.velocity(i);
        store.y[i] = floor;
        store.px[i] = store.x[i] - v.x * config.floor_friction;
        store.py[i] = floor + v.y * config.restitution;
    }
}

#[cfg(test)]
#[path = "tests/collision_tests.rs"]
mod tests;
