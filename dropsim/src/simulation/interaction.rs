//! Drop-drop force law
//!
//! Two regimes, picked by squared center distance `dsq`:
//! - `dsq < 4R^2` (overlapping): repulsion along the center line, magnitude
//!   `(4R^2 - dsq) * RIGIDITY + REPULSION_OFFSET`
//! - `4R^2 <= dsq <= 6R^2`: weak cohesion, magnitude `-TENSION / dsq`
//!
//! Both regimes add a friction term pulling the two velocities together.
//! The result is a velocity delta added to the first drop and subtracted
//! from the second.

use super::params::{CONTACT_DIST_SQ, FRICTION, INTERACTION_DIST_SQ, REPULSION_OFFSET, RIGIDITY, TENSION};
use super::states::{Drop, NVec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairRegime {
    Repulsive, // circles overlap
    Cohesive,  // close but not touching
}

/// Velocity delta for `a` from its interaction with `b`, without applying it
///
/// `None` when the drops share exact coordinates or are out of range.
pub fn pair_impulse(a: &Drop, b: &Drop) -> Option<(PairRegime, NVec2)> {
    if a.same_position(b) {
        return None;
    }

    // r points from b to a, so a positive scale pushes them apart
    let r = a.x - b.x;
    let dsq = r.norm_squared();
    if dsq > INTERACTION_DIST_SQ {
        return None;
    }

    let (regime, mut dv) = if dsq < CONTACT_DIST_SQ {
        let mag = (CONTACT_DIST_SQ - dsq) * RIGIDITY + REPULSION_OFFSET;
        (PairRegime::Repulsive, r * mag)
    } else {
        // dsq >= 4R^2 here, never zero
        let mag = -1.0 / dsq;
        (PairRegime::Cohesive, r * (mag * TENSION))
    };

    dv += FRICTION * (b.v - a.v);

    Some((regime, dv))
}

/// Apply the pair interaction in place: `a.v += dv`, `b.v -= dv`
pub fn interact_pair(a: &mut Drop, b: &mut Drop) -> Option<PairRegime> {
    let (regime, dv) = pair_impulse(a, b)?;
    a.v += dv;
    b.v -= dv;
    Some(regime)
}
