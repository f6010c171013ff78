pub mod states;
pub mod params;
pub mod engine;
pub mod collision;
pub mod interaction;
pub mod neighbors;
pub mod spatial_grid;
pub mod integrator;
pub mod pacing;
pub mod scenario;
pub mod runner;
