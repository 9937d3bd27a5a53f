use serde::Serialize;

use super::PileCore;

// Slack when counting particles as inside the container
const BOUNDS_TOLERANCE: f64 = 1e-6;

/// Whole-pile snapshot for hosts and tests
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PileState {
    pub count: usize,
    pub target_count: usize,
    pub plane_population: Vec<usize>,
    pub avg_y: f64,
    /// Sum of squared per-tick speeds
    pub kinetic: f64,
    pub in_bounds: usize,
    pub bounds_ratio: f64,
}

pub(super) fn snapshot(core: &PileCore) -> PileState {
    let store = &core.store;
    let width = core.config.width;
    let height = core.config.height;
    let n = store.len();

    let mut sum_y = 0.0;
    let mut kinetic = 0.0;
    let mut in_bounds = 0;
    for i in 0..n {
        let (x, y, r) = (store.x[i], store.y[i], store.r[i]);
        sum_y += y;
        kinetic += store.velocity(i).length_squared();
        if x >= r - BOUNDS_TOLERANCE
            && x <= width - r + BOUNDS_TOLERANCE
            && y <= height - r + BOUNDS_TOLERANCE
        {
            in_bounds += 1;
        }
    }

    PileState {
        count: n,
        target_count: core.config.target_count(),
        plane_population: store.population().to_vec(),
        avg_y: if n > 0 { sum_y / n as f64 } else { 0.0 },
        kinetic,
        in_bounds,
        bounds_ratio: if n > 0 { in_bounds as f64 / n as f64 } else { 1.0 },
    }
}
