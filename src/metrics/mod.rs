//! Metrics - read-only summaries of a pile
//!
//! Jostling (per-region speed statistics), compression (fluid occupancy over
//! threshold) and the sleep summary. Nothing here mutates the simulation.

use serde::Serialize;

use crate::domain::Region;
use crate::simulation::PileCore;
use crate::systems::SleepState;

/// Compression sample cap used when the caller has no preference
pub const DEFAULT_MAX_SAMPLES: usize = 12_000;

// Keeps the ratio finite for a zero threshold
const MIN_THRESHOLD: f64 = 1e-4;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JostlingMetrics {
    pub interior_count: usize,
    pub boundary_count: usize,
    pub air_count: usize,
    pub interior_rms: f64,
    pub interior_p95: f64,
    pub boundary_rms: f64,
    pub boundary_p95: f64,
    pub air_rms: f64,
    pub air_p95: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionMetrics {
    pub sampled_cell_count: usize,
    pub mean_compression: f64,
    pub p95_compression: f64,
    pub max_compression: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub jostling: JostlingMetrics,
    pub compression: CompressionMetrics,
    pub sleep: SleepState,
}

/// Nearest-rank percentile of an ascending slice (0 when empty)
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let last = sorted.len() - 1;
    let idx = (p * last as f64).floor().max(0.0) as usize;
    sorted[idx.min(last)]
}

/// RMS and P95 of per-tick speed for each region
pub fn jostling_metrics(core: &PileCore) -> JostlingMetrics {
    let store = core.store();
    let mut speeds: [Vec<f64>; 3] = Default::default();
    let mut sum_sq = [0.0f64; 3];

    for i in 0..store.len() {
        let k = store.region[i].as_u8() as usize;
        let s2 = store.velocity(i).length_squared();
        speeds[k].push(s2.sqrt());
        sum_sq[k] += s2;
    }

    let mut stats = [(0usize, 0.0f64, 0.0f64); 3];
    for k in 0..3 {
        let bucket = &mut speeds[k];
        bucket.sort_by(f64::total_cmp);
        let rms = if bucket.is_empty() { 0.0 } else { (sum_sq[k] / bucket.len() as f64).sqrt() };
        stats[k] = (bucket.len(), rms, percentile(bucket, 0.95));
    }

    let air = stats[Region::Air as usize];
    let boundary = stats[Region::Boundary as usize];
    let interior = stats[Region::Interior as usize];
    JostlingMetrics {
        interior_count: interior.0,
        boundary_count: boundary.0,
        air_count: air.0,
        interior_rms: interior.1,
        interior_p95: interior.2,
        boundary_rms: boundary.1,
        boundary_p95: boundary.2,
        air_rms: air.1,
        air_p95: air.2,
    }
}

/// Occupancy over threshold for cells inside the pile (active, not on the
/// surface); falls back to every active cell when the pile has no inside yet.
pub fn compression_metrics(core: &PileCore, max_samples: usize) -> CompressionMetrics {
    let fluid = core.fluid();
    let threshold = fluid.threshold().max(MIN_THRESHOLD);

    let collect = |skip_surface: bool| -> Vec<f64> {
        let mut out = Vec::new();
        for k in 0..fluid.occupancy.len() {
            if out.len() >= max_samples {
                break;
            }
            if fluid.mask[k] == 0 || (skip_surface && fluid.boundary[k] != 0) {
                continue;
            }
            out.push(fluid.occupancy[k] / threshold);
        }
        out
    };

    let mut samples = collect(true);
    if samples.is_empty() {
        samples = collect(false);
    }
    if samples.is_empty() {
        return CompressionMetrics::default();
    }

    samples.sort_by(f64::total_cmp);
    let sum: f64 = samples.iter().sum();
    CompressionMetrics {
        sampled_cell_count: samples.len(),
        mean_compression: sum / samples.len() as f64,
        p95_compression: percentile(&samples, 0.95),
        max_compression: samples[samples.len() - 1],
    }
}

pub fn summarize(core: &PileCore, max_samples: usize) -> MetricsSummary {
    MetricsSummary {
        jostling: jostling_metrics(core),
        compression: compression_metrics(core, max_samples),
        sleep: core.sleep_state(),
    }
}

#[cfg(test)]
#[path = "tests/metrics_tests.rs"]
mod tests;
