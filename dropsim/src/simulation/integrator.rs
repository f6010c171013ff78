//! Fixed-step leapfrog stepper for the drop world
//!
//! Each drop is advanced in insertion order:
//!
//! 1. energy of its pre-step state is added to the step total
//! 2. half kick:  v_y += DT * G / 2
//! 3. drift:      x += DT * v
//! 4. wall response against every wall
//! 5. pair interaction against every candidate drop, updated in place
//!    (the neighbor source is told where the drop ended up first)
//! 6. second half kick
//!
//! Pair updates are applied immediately, so a drop later in the order sees
//! velocities already changed by earlier drops in the same step, and every
//! unordered pair is evaluated once from each side. Batching the deltas
//! would change the trajectories.

use super::collision::collide_wall;
use super::interaction::interact_pair;
use super::neighbors::NeighborSearch;
use super::params::{DT, G};
use super::states::World;

/// Advance `world` by one step of [`DT`] and return the energy diagnostic
///
/// The returned value is the sum of `0.5 * |v|^2 - G * y` over all drops,
/// each taken just before that drop is advanced. It is never fed back.
pub fn leapfrog_step(world: &mut World, neighbors: &mut dyn NeighborSearch) -> f64 {
    let n = world.drops().len();
    if n == 0 { // no drops, nothing to do
        return 0.0;
    }

    let half_kick = 0.5 * DT * G;

    neighbors.prepare(world.drops());

    let (drops, walls) = world.split_mut();
    let mut candidates = Vec::with_capacity(n);
    let mut energy = 0.0;

    for i in 0..n {
        energy += drops[i].energy();

        let d = &mut drops[i];
        d.v.y += half_kick;
        d.x += DT * d.v;

        for w in walls {
            collide_wall(d, w);
        }
        neighbors.relocate(i, &drops[i].x);

        neighbors.candidates(&drops[i].x, n, &mut candidates);
        for &j in &candidates {
            if j == i {
                continue;
            }
            let (a, b) = pair_mut(drops, i, j);
            interact_pair(a, b);
        }

        drops[i].v.y += half_kick;
    }

    energy
}

/// Two distinct mutable elements of a slice
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i != j);
    if i < j {
        let (lo, hi) = items.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
