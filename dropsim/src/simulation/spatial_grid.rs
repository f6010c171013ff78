//! # Uniform hash grid broad phase
//!
//! Optional replacement for the all-pairs candidate scan. Drops are bucketed
//! by position into square cells at the start of each step, and a drop's
//! bucket is moved as soon as the stepper has advanced it, so the grid
//! always reflects current positions. Only the drop being advanced changes
//! position, pair interactions touch velocities alone.
//!
//! A query returns every drop in the 3x3 block of cells around the queried
//! position, sorted by index. With a cell edge of at least the interaction
//! radius, any drop within range of the queried one sits in that block, so
//! the stepper sees exactly the same interacting pairs in exactly the same
//! order as with [`AllPairs`](super::neighbors::AllPairs), at any speed.
//!
//! Cell indices are clamped far from `i64` limits. Coordinates beyond about
//! 1e18 cells share the outermost cell and stop being separated; the step
//! keeps running.

use std::collections::HashMap;

use super::neighbors::NeighborSearch;
use super::params::INTERACTION_DIST_SQ;
use super::states::{Drop, NVec2};
use crate::error::{Result, SceneError};

/// Largest cell index magnitude, leaves room for the +-1 neighbor ring
const CELL_LIMIT: f64 = (1u64 << 60) as f64;

type CellKey = (i64, i64);

/// Default cell edge: two interaction radii
pub fn default_cell_size() -> f64 {
    2.0 * INTERACTION_DIST_SQ.sqrt()
}

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f64,
    cells: HashMap<CellKey, Vec<usize>>,
    homes: Vec<CellKey>, // current cell of every drop
}

impl SpatialGrid {
    /// Create an empty grid, `cell_size` must cover the interaction radius
    pub fn new(cell_size: f64) -> Result<Self> {
        if !cell_size.is_finite() || cell_size < INTERACTION_DIST_SQ.sqrt() {
            return Err(SceneError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            cell_size,
            cells: HashMap::new(),
            homes: Vec::new(),
        })
    }

    fn axis_cell(&self, v: f64) -> i64 {
        // NaN survives the clamp and casts to 0
        (v / self.cell_size).floor().clamp(-CELL_LIMIT, CELL_LIMIT) as i64
    }

    fn cell_of(&self, pos: &NVec2) -> CellKey {
        (self.axis_cell(pos.x), self.axis_cell(pos.y))
    }
}

impl NeighborSearch for SpatialGrid {
    fn prepare(&mut self, drops: &[Drop]) {
        self.cells.clear();
        self.homes.clear();
        for (i, d) in drops.iter().enumerate() {
            let key = self.cell_of(&d.x);
            self.cells.entry(key).or_default().push(i);
            self.homes.push(key);
        }
    }

    fn relocate(&mut self, i: usize, pos: &NVec2) {
        let key = self.cell_of(pos);
        let Some(old) = self.homes.get(i).copied() else {
            return;
        };
        if key == old {
            return;
        }

        if let Some(bucket) = self.cells.get_mut(&old) {
            if let Some(slot) = bucket.iter().position(|&k| k == i) {
                bucket.swap_remove(slot);
            }
            if bucket.is_empty() {
                self.cells.remove(&old);
            }
        }
        self.cells.entry(key).or_default().push(i);
        self.homes[i] = key;
    }

    fn candidates(&self, pos: &NVec2, _count: usize, out: &mut Vec<usize>) {
        out.clear();
        let (cx, cy) = self.cell_of(pos);
        for gx in cx.saturating_sub(1)..=cx.saturating_add(1) {
            for gy in cy.saturating_sub(1)..=cy.saturating_add(1) {
                if let Some(bucket) = self.cells.get(&(gx, gy)) {
                    out.extend_from_slice(bucket);
                }
            }
        }
        // cells are disjoint, so no duplicates, only order to restore
        out.sort_unstable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::params::R;

    #[test]
    fn rejects_cells_smaller_than_interaction_radius() {
        assert!(SpatialGrid::new(R).is_err());
        assert!(SpatialGrid::new(f64::NAN).is_err());
        assert!(SpatialGrid::new(default_cell_size()).is_ok());
    }

    #[test]
    fn query_returns_sorted_neighbors_only() {
        let drops = vec![
            Drop::at_rest(0.0, 0.0),
            Drop::at_rest(5.0, 5.0),
            Drop::at_rest(0.03, 0.0),
            Drop::at_rest(-0.03, 0.01),
        ];
        let mut grid = SpatialGrid::new(default_cell_size()).unwrap();
        grid.prepare(&drops);

        let mut out = Vec::new();
        grid.candidates(&drops[0].x, drops.len(), &mut out);
        assert_eq!(out, vec![0, 2, 3]);
    }

    #[test]
    fn relocated_drop_is_found_at_its_new_cell() {
        let drops = vec![Drop::at_rest(0.0, 0.0), Drop::at_rest(3.0, 0.0)];
        let mut grid = SpatialGrid::new(default_cell_size()).unwrap();
        grid.prepare(&drops);

        // drop 1 jumps next to drop 0 within one step
        let moved = NVec2::new(0.03, 0.0);
        grid.relocate(1, &moved);

        let mut out = Vec::new();
        grid.candidates(&drops[0].x, drops.len(), &mut out);
        assert_eq!(out, vec![0, 1]);

        grid.candidates(&NVec2::new(3.0, 0.0), drops.len(), &mut out);
        assert!(out.is_empty(), "old cell still holds drop 1: {out:?}");
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let drops = vec![
            Drop::at_rest(1e300, -1e300),
            Drop::at_rest(f64::INFINITY, f64::NEG_INFINITY),
            Drop::at_rest(f64::NAN, 0.0),
        ];
        let mut grid = SpatialGrid::new(0.2).unwrap();
        grid.prepare(&drops);

        let mut out = Vec::new();
        for d in &drops {
            grid.candidates(&d.x, drops.len(), &mut out);
        }
        grid.relocate(0, &NVec2::new(f64::MAX, f64::MAX));
    }
}
