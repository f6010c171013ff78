//! Compile-time physical and numerical constants
//!
//! Every drop shares the same radius, the step increment is fixed, and the
//! force law constants are baked in. Nothing here is read from a scenario
//! file: a scenario only decides where drops and walls start.

/// Drop radius, shared by every drop
pub const R: f64 = 0.02;

/// Time advanced by one step (not the wall-clock delta)
pub const DT: f64 = 0.03;

/// Gravity strength and direction (negative = downward)
pub const G: f64 = -1.0;

/// Target step frequency in Hz
pub const FRAME_RATE: u32 = 60;

// ---------------------------------------------------------------------
// wall response
// ---------------------------------------------------------------------

/// Velocity scale applied to the reflected component on a wall bounce
pub const RESTITUTION: f64 = 0.6;

/// Positional correction gain, applied as `DT^2 * penetration * WALL_STIFFNESS`
pub const WALL_STIFFNESS: f64 = 500.0;

/// Extra vertical velocity on a floor/ceiling hit, cancels half a step of gravity
pub const ANTI_SINK: f64 = -G * DT / 2.0;

// ---------------------------------------------------------------------
// drop-drop force law
// ---------------------------------------------------------------------

/// Near-field repulsion gain
pub const RIGIDITY: f64 = 2.0 / (R * R);

/// Constant repulsion term added to the near-field magnitude
pub const REPULSION_OFFSET: f64 = 0.1;

/// Far-field cohesion gain
pub const TENSION: f64 = 0.00005;

/// Relative-velocity damping between interacting drops
pub const FRICTION: f64 = 0.01;

/// Squared center distance at which two drops touch (2R)^2
pub const CONTACT_DIST_SQ: f64 = 4.0 * R * R;

/// Squared center distance beyond which two drops ignore each other
pub const INTERACTION_DIST_SQ: f64 = 6.0 * R * R;
