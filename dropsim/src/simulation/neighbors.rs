//! Candidate-pair sources for the drop interaction pass
//!
//! The stepper asks a [`NeighborSearch`] which drops might interact with the
//! drop it is currently updating. Candidates must come back in ascending
//! index order so every source visits pairs in the same order as the
//! all-pairs loop; the force law itself rejects anything out of range.

use super::states::{Drop, NVec2};

pub trait NeighborSearch {
    /// Called once at the start of every step, before any drop moves
    fn prepare(&mut self, drops: &[Drop]);

    /// Called right after drop `i` has been moved to `pos` this step
    fn relocate(&mut self, _i: usize, _pos: &NVec2) {}

    /// Fill `out` with candidate indices for a drop currently at `pos`
    ///
    /// `count` is the number of drops in the world. `out` is cleared first.
    fn candidates(&self, pos: &NVec2, count: usize, out: &mut Vec<usize>);
}

/// Every drop is a candidate for every other drop, O(n^2) per step
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPairs;

impl NeighborSearch for AllPairs {
    fn prepare(&mut self, _drops: &[Drop]) {}

    fn candidates(&self, _pos: &NVec2, count: usize, out: &mut Vec<usize>) {
        out.clear();
        out.extend(0..count);
    }
}
