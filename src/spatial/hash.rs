//! SpatialHash - flat broad-phase grid keyed by (plane, row, column)
//!
//! Rebuilt from scratch once per step with a counting sort: per-cell counts,
//! exclusive prefix sum into `cell_start`, then a scatter into `items`. No
//! per-step allocation once the buffers have grown to the particle count.
//! Coordinates outside the container clamp into the edge cells so particles
//! still above the spawn line are bucketed too.

use super::store::ParticleStore;
use crate::domain::PileConfig;

pub struct SpatialHash {
    cell: f64,
    cols: i32,
    rows: i32,
    planes: usize,
    /// Neighbour ring width per plane (in cells)
    reach: Vec<i32>,
    /// cell_start[k]..cell_start[k + 1] indexes `items` for cell key k
    cell_start: Vec<u32>,
    items: Vec<u32>,
    particle_key: Vec<u32>,
}

impl SpatialHash {
    pub fn new(config: &PileConfig) -> Self {
        let cell = config.hash_cell_size();
        let cols = ((config.width / cell).ceil() as i32).max(1);
        let rows = ((config.height / cell).ceil() as i32).max(1);
        let planes = config.plane_count();

        // Large planes need a wider ring than 3x3 to see every contact
        let reach = (0..planes)
            .map(|p| {
                let span = 2.0 * config.max_radius(p) * config.contact_reach.max(1.0);
                ((span / cell).ceil() as i32).max(1)
            })
            .collect();

        let key_count = planes * (cols * rows) as usize;
        Self {
            cell,
            cols,
            rows,
            planes,
            reach,
            cell_start: vec![0; key_count + 1],
            items: Vec::new(),
            particle_key: Vec::new(),
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell
    }

    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.cols, self.rows)
    }

    #[inline]
    pub fn reach(&self, plane: usize) -> i32 {
        self.reach[plane]
    }

    /// Clamped cell coordinates for a position
    #[inline]
    pub fn cell_coords(&self, x: f64, y: f64) -> (i32, i32) {
        let cx = ((x / self.cell).floor() as i32).clamp(0, self.cols - 1);
        let cy = ((y / self.cell).floor() as i32).clamp(0, self.rows - 1);
        (cx, cy)
    }

    #[inline]
    fn key(&self, plane: usize, cx: i32, cy: i32) -> usize {
        (plane * self.rows as usize + cy as usize) * self.cols as usize + cx as usize
    }

    pub fn build(&mut self, store: &ParticleStore) {
        let n = store.len();
        self.cell_start.fill(0);
        self.particle_key.resize(n, 0);
        self.items.resize(n, 0);

        for i in 0..n {
            let (cx, cy) = self.cell_coords(store.x[i], store.y[i]);
            let key = self.key(store.plane[i] as usize, cx, cy);
            self.particle_key[i] = key as u32;
            self.cell_start[key + 1] += 1;
        }

        for k in 1..self.cell_start.len() {
            self.cell_start[k] += self.cell_start[k - 1];
        }

        // Scatter using cell_start[k] as a cursor, then shift back
        for i in 0..n {
            let key = self.particle_key[i] as usize;
            let slot = self.cell_start[key] as usize;
            self.items[slot] = i as u32;
            self.cell_start[key] += 1;
        }
        for k in (1..self.cell_start.len()).rev() {
            self.cell_start[k] = self.cell_start[k - 1];
        }
        self.cell_start[0] = 0;
    }

    /// Visit every bucketed particle on `plane` in the ring around (x, y).
    /// Indices come out in ascending key order, ascending index within a cell.
    #[inline]
    pub fn for_each_candidate(&self, x: f64, y: f64, plane: usize, mut f: impl FnMut(usize)) {
        debug_assert!(plane < self.planes);
        let reach = self.reach[plane];
        let (cx, cy) = self.cell_coords(x, y);
        let y0 = (cy - reach).max(0);
        let y1 = (cy + reach).min(self.rows - 1);
        let x0 = (cx - reach).max(0);
        let x1 = (cx + reach).min(self.cols - 1);
        for yy in y0..=y1 {
            let row_start = self.key(plane, x0, yy);
            let row_end = self.key(plane, x1, yy);
            let begin = self.cell_start[row_start] as usize;
            let end = self.cell_start[row_end + 1] as usize;
            for &j in &self.items[begin..end] {
                f(j as usize);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/hash_tests.rs"]
mod tests;
