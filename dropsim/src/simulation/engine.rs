//! High-level runtime engine settings
//!
//! Selects the broad phase used by the drop interaction pass.

use crate::configuration::config::BroadPhaseConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub broad_phase: BroadPhaseConfig, // all pairs or hash grid
    pub cell_size: f64,                // grid cell edge, unused for all pairs
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            broad_phase: BroadPhaseConfig::AllPairs,
            cell_size: super::spatial_grid::default_cell_size(),
        }
    }
}
