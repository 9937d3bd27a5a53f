use super::perf_stats::PerfStats;
use super::PileCore;

pub(super) fn enable_perf_metrics(core: &mut PileCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn perf_stats(core: &PileCore) -> PerfStats {
    core.perf_stats.clone()
}
