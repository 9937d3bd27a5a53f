use crate::core::Rng;
use crate::domain::PileConfig;
use crate::spatial::{ParticleStore, SpatialHash};
use crate::systems::{FluidGrid, Pointer, Spawner};

use super::perf_stats::PerfStats;
use super::PileCore;

/// Build an empty world from an already validated config
pub(super) fn create_pile_core(config: PileConfig) -> PileCore {
    let planes = config.plane_count();
    let capacity = config.target_count();
    let core = PileCore {
        rng: Rng::new(config.seed),
        store: ParticleStore::new(planes, capacity),
        spawner: Spawner::new(planes),
        hash: SpatialHash::new(&config),
        fluid: FluidGrid::new(&config),
        pointer: Pointer::at(config.width * 0.5, config.height * 0.5),
        frame: 0,
        fill_reported: false,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    };
    log::debug!(
        "pile created: {}x{}, {} planes, target {} particles, seed {}",
        core.config.width,
        core.config.height,
        planes,
        capacity,
        core.config.seed
    );
    core
}
