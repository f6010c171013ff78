pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Drop, Wall, World, NVec2};
pub use simulation::collision::{collide_wall, WallContact};
pub use simulation::interaction::{interact_pair, pair_impulse, PairRegime};
pub use simulation::neighbors::{AllPairs, NeighborSearch};
pub use simulation::spatial_grid::SpatialGrid;
pub use simulation::integrator::leapfrog_step;
pub use simulation::pacing::FramePacer;
pub use simulation::scenario::Scenario;
pub use simulation::engine::Engine;
pub use simulation::runner::{run_headless, run_paced};

pub use configuration::config::{BroadPhaseConfig, EngineConfig, DropConfig, BlockConfig, WallConfig, WallRunConfig, ScenarioConfig};

#[cfg(feature = "viewer")]
pub use visualization::drops_vis2d::run_2d;

pub use benchmark::benchmark::{bench_interaction, bench_step_curve};

pub use error::{Result, SceneError};
