//! Core state types for the drop simulation
//!
//! - `Drop`  point mass with position and velocity, radius is [`R`](super::params::R)
//! - `Wall`  static axis-aligned square with its own half-extent
//! - `World` insertion-ordered drops and walls
//!
//! Drops and walls are only inserted while seeding a scene. After that the
//! stepper is the only writer.

use nalgebra::Vector2;

use super::params::G;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drop {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

impl Drop {
    pub fn new(x: NVec2, v: NVec2) -> Self {
        Self { x, v }
    }

    /// A drop with zero velocity
    pub fn at_rest(x: f64, y: f64) -> Self {
        Self {
            x: NVec2::new(x, y),
            v: NVec2::zeros(),
        }
    }

    /// Kinetic plus potential energy, potential measured as `-G * y`
    pub fn energy(&self) -> f64 {
        0.5 * self.v.norm_squared() - G * self.x.y
    }

    /// Exact coordinate match, used to skip self-interaction
    pub fn same_position(&self, other: &Drop) -> bool {
        self.x.x == other.x.x && self.x.y == other.x.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub x: NVec2, // center
    pub r: f64,   // half-extent
}

impl Wall {
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self {
            x: NVec2::new(x, y),
            r,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct World {
    drops: Vec<Drop>,
    walls: Vec<Wall>,
}

impl World {
    pub fn new(drops: Vec<Drop>, walls: Vec<Wall>) -> Self {
        Self { drops, walls }
    }

    pub fn push_drop(&mut self, drop: Drop) {
        self.drops.push(drop);
    }

    pub fn push_wall(&mut self, wall: Wall) {
        self.walls.push(wall);
    }

    pub fn drops(&self) -> &[Drop] {
        &self.drops
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Mutable drops next to the (immutable) walls, for the stepper only
    pub(crate) fn split_mut(&mut self) -> (&mut [Drop], &[Wall]) {
        (&mut self.drops, &self.walls)
    }

    /// Total energy of the current state, without advancing
    pub fn total_energy(&self) -> f64 {
        self.drops.iter().map(Drop::energy).sum()
    }
}
