use super::*;

fn config() -> PileConfig {
    PileConfig {
        width: 200.0,
        height: 100.0,
        contact_tangent_damp: 0.0,
        plane_base_target: vec![10, 10],
        plane_size_scale: vec![1.0, 1.0],
        plane_spawn_weight: vec![0.5, 0.5],
        plane_gravity_scale: vec![1.0, 1.0],
        plane_mouse_influence: vec![1.0, 1.0],
        ..PileConfig::default()
    }
}

fn at_rest(store: &mut ParticleStore, x: f64, y: f64, r: f64, plane: u8) -> usize {
    store.push(Vec2::new(x, y), Vec2::new(x, y), r, plane)
}

#[test]
fn overlapping_pair_is_pushed_apart_symmetrically() {
    let config = config();
    let mut store = ParticleStore::new(2, 2);
    let a = at_rest(&mut store, 50.0, 50.0, 5.0, 0);
    let b = at_rest(&mut store, 58.0, 50.0, 5.0, 0);

    assert!(!resolve_pair(&mut store, &config, a, b));
    let shift = (2.0 - config.contact_slop) * config.position_correction;
    assert!((store.x[a] - (50.0 - shift)).abs() < 1e-12);
    assert!((store.x[b] - (58.0 + shift)).abs() < 1e-12);
    // separating after correction: no impulse, velocities mirror
    assert!((store.velocity(a).x + store.velocity(b).x).abs() < 1e-12);
}

#[test]
fn approaching_pair_gets_normal_impulse() {
    let config = config();
    let mut store = ParticleStore::new(2, 2);
    let a = store.push(Vec2::new(50.0, 50.0), Vec2::new(47.0, 50.0), 5.0, 0);
    let b = store.push(Vec2::new(59.0, 50.0), Vec2::new(62.0, 50.0), 5.0, 0);

    resolve_pair(&mut store, &config, a, b);
    let va = store.velocity(a);
    let vb = store.velocity(b);
    // closing speed reversed and scaled by restitution
    assert!(vb.x - va.x > 0.0);
    assert!((va.x + vb.x).abs() < 1e-12);
}

#[test]
fn different_planes_never_interact() {
    let config = config();
    let mut store = ParticleStore::new(2, 2);
    let a = at_rest(&mut store, 50.0, 50.0, 5.0, 0);
    let b = at_rest(&mut store, 51.0, 50.0, 5.0, 1);
    resolve_pair(&mut store, &config, a, b);
    assert_eq!(store.pos(a), Vec2::new(50.0, 50.0));
    assert_eq!(store.pos(b), Vec2::new(51.0, 50.0));
    assert_eq!(store.velocity(a), Vec2::zero());
}

#[test]
fn contacts_inside_slop_and_coincident_centres_are_ignored() {
    let config = config();
    let mut store = ParticleStore::new(2, 4);
    let a = at_rest(&mut store, 50.0, 50.0, 5.0, 0);
    let b = at_rest(&mut store, 59.95, 50.0, 5.0, 0);
    resolve_pair(&mut store, &config, a, b);
    assert_eq!(store.x[b], 59.95);

    let c = at_rest(&mut store, 120.0, 50.0, 5.0, 0);
    let d = at_rest(&mut store, 120.0, 50.0, 5.0, 0);
    resolve_pair(&mut store, &config, c, d);
    assert_eq!(store.pos(c), store.pos(d));
}

#[test]
fn gentle_contact_leaves_sleeper_frozen() {
    let config = config();
    let mut store = ParticleStore::new(2, 2);
    let a = at_rest(&mut store, 50.0, 50.0, 5.0, 0);
    let b = at_rest(&mut store, 59.0, 50.0, 5.0, 0);
    store.put_to_sleep(b);

    assert!(!resolve_pair(&mut store, &config, a, b));
    assert!(store.is_sleeping(b));
    assert_eq!(store.pos(b), Vec2::new(59.0, 50.0));
    assert_eq!(store.velocity(b), Vec2::zero());
    assert!(store.x[a] < 50.0);
}

#[test]
fn deep_overlap_wakes_sleeper() {
    let config = config();
    let mut store = ParticleStore::new(2, 2);
    let a = at_rest(&mut store, 50.0, 50.0, 5.0, 0);
    let b = at_rest(&mut store, 55.0, 50.0, 5.0, 0);
    store.put_to_sleep(b);

    // overlap 5 / 10 > wake_overlap_ratio
    assert!(resolve_pair(&mut store, &config, a, b));
    assert!(!store.is_sleeping(b));
    assert!(store.x[b] > 55.0);
}

#[test]
fn hard_impact_wakes_sleeper() {
    let config = config();
    let mut store = ParticleStore::new(2, 2);
    let a = store.push(Vec2::new(50.0, 50.0), Vec2::new(47.0, 50.0), 5.0, 0);
    let b = at_rest(&mut store, 59.0, 50.0, 5.0, 0);
    store.put_to_sleep(b);
    assert!(resolve_pair(&mut store, &config, a, b));
    assert!(store.velocity(b).x > 0.0);
}

#[test]
fn tangential_damping_reduces_sliding() {
    let config = PileConfig { contact_tangent_damp: 0.5, ..config() };
    let mut store = ParticleStore::new(2, 2);
    let a = store.push(Vec2::new(50.0, 50.0), Vec2::new(50.0, 51.0), 5.0, 0);
    let b = at_rest(&mut store, 59.0, 50.0, 5.0, 0);
    resolve_pair(&mut store, &config, a, b);
    let rel_t = store.velocity(b).y - store.velocity(a).y;
    assert!((rel_t - 0.5).abs() < 1e-9, "rel_t {rel_t}");
}

#[test]
fn walls_clamp_and_reflect() {
    let config = config();
    let mut store = ParticleStore::new(2, 2);
    let left = store.push(Vec2::new(2.0, 50.0), Vec2::new(4.0, 50.0), 5.0, 0);
    let right = store.push(Vec2::new(199.0, 50.0), Vec2::new(197.0, 50.0), 5.0, 0);
    resolve_boundary(&mut store, &config, left);
    resolve_boundary(&mut store, &config, right);

    assert_eq!(store.x[left], 5.0);
    assert!((store.velocity(left).x - 2.0 * config.restitution).abs() < 1e-12);
    assert_eq!(store.x[right], 195.0);
    assert!((store.velocity(right).x + 2.0 * config.restitution).abs() < 1e-12);
}

#[test]
fn floor_applies_friction_and_bounce() {
    let config = config();
    let mut store = ParticleStore::new(2, 1);
    let i = store.push(Vec2::new(50.0, 98.0), Vec2::new(49.0, 94.0), 5.0, 0);
    resolve_boundary(&mut store, &config, i);
    assert_eq!(store.y[i], 95.0);
    let v = store.velocity(i);
    assert!((v.x - config.floor_friction).abs() < 1e-12);
    assert!((v.y + 4.0 * config.restitution).abs() < 1e-12);
}

#[test]
fn solve_separates_overlaps_and_keeps_particles_inside() {
    let config = config();
    let mut store = ParticleStore::new(2, 3);
    at_rest(&mut store, 50.0, 94.0, 5.0, 0);
    at_rest(&mut store, 56.0, 94.0, 5.0, 0);
    at_rest(&mut store, 53.0, 94.0, 5.0, 1);
    let mut hash = SpatialHash::new(&config);

    let stats = solve(&mut store, &mut hash, &config);
    assert!(stats.pair_tests >= 2);
    assert_eq!(stats.wakes, 0);
    assert!(store.x[1] - store.x[0] > 6.0);
    // lone plane-1 particle only touched by the floor clamp
    assert_eq!(store.x[2], 53.0);
    for i in 0..store.len() {
        assert!(store.y[i] <= config.height - store.r[i]);
    }
}

#[test]
fn sleeper_woken_mid_pass_still_meets_later_particles() {
    let config = PileConfig { collision_passes: 1, ..config() };
    let mut store = ParticleStore::new(2, 3);
    let sleeper = at_rest(&mut store, 50.0, 50.0, 5.0, 0);
    store.put_to_sleep(sleeper);
    // deep enough to wake the sleeper on index 1's turn
    at_rest(&mut store, 44.0, 50.0, 5.0, 0);
    let late = at_rest(&mut store, 56.0, 50.0, 5.0, 0);
    let mut hash = SpatialHash::new(&config);

    let stats = solve(&mut store, &mut hash, &config);
    assert_eq!(stats.wakes, 1);
    assert!(!store.is_sleeping(sleeper));
    // the (sleeper, late) contact was resolved in the same single pass
    assert!(store.x[late] > 56.0);
    // (1,0) (1,2) then (2,0); (2,1) was already covered from 1
    assert_eq!(stats.pair_tests, 3);
}
