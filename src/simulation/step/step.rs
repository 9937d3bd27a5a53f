use crate::systems::{collision, integrator, sleep};

use super::{PerfTimer, PileCore};

pub(super) fn step(core: &mut PileCore, dt: f64) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === Spawn ===
    let spawned = PerfTimer::measure(perf_on, &mut core.perf_stats.spawn_ms, || {
        core.spawner.spawn_step(&mut core.store, &mut core.rng, &core.config, dt)
    });
    if !core.fill_reported && core.store.len() >= core.config.target_count() {
        core.fill_reported = true;
        log::debug!("pile filled: {} particles at frame {}", core.store.len(), core.frame);
    }

    // === Integrate ===
    let pointer_wakes = PerfTimer::measure(perf_on, &mut core.perf_stats.integrate_ms, || {
        integrator::integrate(&mut core.store, &core.config, &core.pointer, dt)
    });

    // === Collide (rebuilds the hash) ===
    let contacts = PerfTimer::measure(perf_on, &mut core.perf_stats.collide_ms, || {
        collision::solve(&mut core.store, &mut core.hash, &core.config)
    });

    // === Regions + sleep ===
    let classify = core.frame % core.config.region_update_interval == 0;
    let (region_wakes, fell_asleep) = PerfTimer::measure(perf_on, &mut core.perf_stats.sleep_ms, || {
        let woken = if classify {
            sleep::classify_regions(&mut core.store, &core.hash, &core.config)
        } else {
            0
        };
        let slept = sleep::update_sleep(&mut core.store, &core.config);
        core.store.record_end_positions();
        (woken, slept)
    });

    core.pointer.decay();

    // === Fluid grid ===
    if core.frame % core.config.fluid_update_interval == 0 {
        PerfTimer::measure(perf_on, &mut core.perf_stats.fluid_ms, || core.fluid.update(&core.store));
    }

    core.frame += 1;

    if let Some(timer) = step_start {
        let sleeping = core.store.sleeping_count();
        let stats = &mut core.perf_stats;
        stats.step_ms = timer.elapsed_ms();
        stats.particle_count = core.store.len() as u32;
        stats.sleeping_count = sleeping as u32;
        stats.awake_count = (core.store.len() - sleeping) as u32;
        stats.spawned = spawned as u32;
        stats.pair_tests = contacts.pair_tests;
        stats.contact_wakes = contacts.wakes;
        stats.pointer_wakes = pointer_wakes as u32;
        stats.region_wakes = region_wakes as u32;
        stats.fell_asleep = fell_asleep as u32;
        log::trace!(
            "frame {}: {:.3} ms, {} awake, {} pair tests",
            core.frame,
            stats.step_ms,
            stats.awake_count,
            stats.pair_tests
        );
    }
}
