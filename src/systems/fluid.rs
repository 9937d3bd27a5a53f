//! Fluid occupancy grid - coarse packing density for compression analysis
//!
//! Each refresh bins particle area into cells (area / cell area, so a tightly
//! packed cell sits well above 0.58 and overlap pushes it higher), blends it
//! half-and-half with the previous value, then derives the masks. Nothing in
//! the physics reads this grid.

use std::f64::consts::PI;

use crate::domain::PileConfig;
use crate::spatial::ParticleStore;

// Blend weight of the fresh sample
const SMOOTHING: f64 = 0.5;
// Active when occupancy exceeds this share of fluid_threshold
const ACTIVE_FRACTION: f64 = 0.25;

pub struct FluidGrid {
    cell: f64,
    cols: usize,
    rows: usize,
    threshold: f64,
    raw: Vec<f64>,
    pub occupancy: Vec<f64>,
    /// 1 = cell holds material
    pub mask: Vec<u8>,
    /// 1 = active cell touching an inactive neighbour or the open top
    pub boundary: Vec<u8>,
}

impl FluidGrid {
    pub fn new(config: &PileConfig) -> Self {
        let cell = config.fluid_cell_size();
        let cols = ((config.width / cell).ceil() as usize).max(1);
        let rows = ((config.height / cell).ceil() as usize).max(1);
        let size = cols * rows;
        Self {
            cell,
            cols,
            rows,
            threshold: config.fluid_threshold,
            raw: vec![0.0; size],
            occupancy: vec![0.0; size],
            mask: vec![0; size],
            boundary: vec![0; size],
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    fn idx(&self, cx: usize, cy: usize) -> usize {
        cy * self.cols + cx
    }

    pub fn update(&mut self, store: &ParticleStore) {
        let area = self.cell * self.cell;
        self.raw.fill(0.0);
        for i in 0..store.len() {
            let cx = (store.x[i] / self.cell).floor();
            let cy = (store.y[i] / self.cell).floor();
            // Particles still above the container are not counted
            if cx < 0.0 || cy < 0.0 || cx >= self.cols as f64 || cy >= self.rows as f64 {
                continue;
            }
            let k = self.idx(cx as usize, cy as usize);
            self.raw[k] += PI * store.r[i] * store.r[i] / area;
        }

        let active_above = self.threshold * ACTIVE_FRACTION;
        for k in 0..self.occupancy.len() {
            self.occupancy[k] = self.occupancy[k] * (1.0 - SMOOTHING) + self.raw[k] * SMOOTHING;
            self.mask[k] = u8::from(self.occupancy[k] > active_above);
        }

        // Walls and floor count as filled, the open top as empty
        for cy in 0..self.rows {
            for cx in 0..self.cols {
                let k = self.idx(cx, cy);
                if self.mask[k] == 0 {
                    self.boundary[k] = 0;
                    continue;
                }
                let up = cy > 0 && self.mask[k - self.cols] != 0;
                let down = cy + 1 >= self.rows || self.mask[k + self.cols] != 0;
                let left = cx == 0 || self.mask[k - 1] != 0;
                let right = cx + 1 >= self.cols || self.mask[k + 1] != 0;
                self.boundary[k] = u8::from(!(up && down && left && right));
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/fluid_tests.rs"]
mod tests;
