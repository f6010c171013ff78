//! Drop vs. wall collision response
//!
//! Walls are axis-aligned squares. A drop that overlaps a wall and is moving
//! toward it gets its velocity component on the dominant axis reflected
//! (scaled by [`RESTITUTION`]) and is pushed back out by a stiff positional
//! correction. Hits on the top or bottom face also get the anti-sink nudge
//! so a drop resting on a floor does not creep into it.

use super::params::{ANTI_SINK, DT, R, RESTITUTION, WALL_STIFFNESS};
use super::states::{Drop, Wall};

/// Which wall face a drop was pushed out of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    Right,  // drop right of the wall, moving left
    Left,   // drop left of the wall, moving right
    Top,    // drop above the wall, moving down
    Bottom, // drop below the wall, moving up
}

/// Resolve one drop against one wall, in place
///
/// Faces are tested in fixed order (right, left, top, bottom) and at most
/// one fires. Returns `None` when the drop is clear of the wall, sits in a
/// corner region, or is not moving toward the dominant face.
pub fn collide_wall(drop: &mut Drop, wall: &Wall) -> Option<WallContact> {
    let dx = drop.x.x - wall.x.x;
    let dy = drop.x.y - wall.x.y;
    let reach = R + wall.r;

    // no overlap on at least one axis
    if dx.abs() > reach || dy.abs() > reach {
        return None;
    }
    // corner region
    if dx.abs() > wall.r && dy.abs() > wall.r {
        return None;
    }

    let fdx = dx.abs();
    let fdy = dy.abs();
    let push = DT * DT * WALL_STIFFNESS;

    if dx > 0.0 && dx > fdy && drop.v.x < 0.0 {
        drop.v.x = -drop.v.x * RESTITUTION;
        drop.x.x += push * (reach - dx);
        Some(WallContact::Right)
    } else if dx < 0.0 && -dx > fdy && drop.v.x > 0.0 {
        drop.v.x = -drop.v.x * RESTITUTION;
        drop.x.x -= push * (reach + dx);
        Some(WallContact::Left)
    } else if dy > 0.0 && dy > fdx && drop.v.y < 0.0 {
        drop.v.y = -drop.v.y * RESTITUTION + ANTI_SINK;
        drop.x.y += push * (reach - dy);
        Some(WallContact::Top)
    } else if dy < 0.0 && -dy > fdx && drop.v.y > 0.0 {
        drop.v.y = -drop.v.y * RESTITUTION + ANTI_SINK;
        drop.x.y -= push * (reach + dy);
        Some(WallContact::Bottom)
    } else {
        // overlapping without a clear approach axis, left alone this step
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::NVec2;

    #[test]
    fn corner_region_is_ignored() {
        let wall = Wall::new(0.0, 0.0, 0.25);
        let mut drop = Drop::new([0.26, 0.26].into(), [-1.0, -1.0].into());
        assert_eq!(collide_wall(&mut drop, &wall), None);
        assert_eq!(drop.v, NVec2::new(-1.0, -1.0));
    }

    #[test]
    fn bottom_face_pushes_drop_down() {
        let wall = Wall::new(0.0, 0.0, 0.25);
        let mut drop = Drop::new([0.0, -0.26].into(), [0.0, 0.5].into());
        assert_eq!(collide_wall(&mut drop, &wall), Some(WallContact::Bottom));
        assert!(drop.x.y < -0.26);
        assert!(drop.v.y < 0.0);
    }
}
