//! PileCore - one deterministic pile simulation
//!
//! Owns every piece of state (particles, RNG, hash, fluid grid, pointer) and
//! only orchestrates: each stage lives in `systems/`, the per-step ordering in
//! `step/step.rs`. One instance is single-threaded; independent instances share
//! nothing.

use crate::core::Rng;
use crate::domain::{ConfigError, PileConfig};
use crate::spatial::{ParticleStore, SpatialHash};
use crate::systems::{FluidGrid, Pointer, SleepState, Spawner};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/pointer.rs"]
mod pointer;
#[path = "state/state.rs"]
mod state;
mod facade;

pub use facade::PileWorld;
pub use perf_stats::PerfStats;
pub use state::PileState;

use perf_timer::PerfTimer;

pub struct PileCore {
    config: PileConfig,
    rng: Rng,
    store: ParticleStore,
    spawner: Spawner,
    hash: SpatialHash,
    fluid: FluidGrid,
    pointer: Pointer,

    // State
    frame: u64,
    fill_reported: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl PileCore {
    /// Validate `config` and build an empty world
    pub fn new(config: PileConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(init::create_pile_core(config))
    }

    /// Parse JSON overrides onto the defaults and build
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = PileConfig::from_json(json)?;
        Ok(init::create_pile_core(config))
    }

    pub fn with_defaults() -> Self {
        init::create_pile_core(PileConfig::default())
    }

    // === Read access ===

    #[inline]
    pub fn config(&self) -> &PileConfig {
        &self.config
    }

    #[inline]
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    #[inline]
    pub fn fluid(&self) -> &FluidGrid {
        &self.fluid
    }

    #[inline]
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.store.len()
    }

    pub fn target_count(&self) -> usize {
        self.config.target_count()
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    #[cfg(test)]
    pub(crate) fn fluid_mut(&mut self) -> &mut FluidGrid {
        &mut self.fluid
    }

    // === Step loop ===

    /// Advance one tick of `fixed_dt`
    pub fn step(&mut self) {
        let dt = self.config.fixed_dt;
        step::step(self, dt);
    }

    /// Advance one tick of a host-chosen `dt` (reproducible only if the
    /// host's dt sequence is)
    pub fn step_dt(&mut self, dt: f64) {
        step::step(self, dt);
    }

    pub fn run_steps(&mut self, count: u32) {
        for _ in 0..count {
            self.step();
        }
    }

    pub fn run_steps_dt(&mut self, count: u32, dt: f64) {
        for _ in 0..count {
            self.step_dt(dt);
        }
    }

    // === Spawning (also driven by the step loop) ===

    /// Spawn one particle on `plane` right away; false at capacity or target
    pub fn spawn_one(&mut self, plane: usize) -> bool {
        if plane >= self.config.plane_count() {
            return false;
        }
        self.spawner.spawn_one(&mut self.store, &mut self.rng, &self.config, plane)
    }

    // === Pointer ===

    pub fn set_mouse(&mut self, x: f64, y: f64, vx: f64, vy: f64, active: bool) {
        pointer::set_mouse(self, x, y, vx, vy, active);
    }

    pub fn clear_mouse(&mut self) {
        pointer::clear_mouse(self);
    }

    // === Snapshots ===

    pub fn state(&self) -> PileState {
        state::snapshot(self)
    }

    pub fn sleep_state(&self) -> SleepState {
        SleepState::collect(&self.store)
    }

    // === Perf ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
