//! Configuration types for loading scenes from YAML.
//!
//! A scenario file only describes where things start. Physical constants
//! are compiled in (see [`params`](crate::simulation::params)).
//!
//! - [`EngineConfig`]   – broad-phase choice for the drop interaction pass
//! - [`DropConfig`]     – one explicitly placed drop
//! - [`BlockConfig`]    – a rectangular lattice of drops
//! - [`WallConfig`]     – one explicitly placed wall
//! - [`WallRunConfig`]  – walls spaced evenly along a line segment
//! - [`ScenarioConfig`] – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   broad_phase: "all_pairs"   # or "grid"
//!   cell_size: 0.1             # grid only, optional
//!
//! drops:
//!   - x: [ 0.0, 0.5 ]
//!     v: [ 0.0, 0.0 ]          # optional, defaults to rest
//!
//! blocks:
//!   - origin: [ -1.2, 0.2 ]
//!     nx: 42
//!     ny: 42
//!     spacing: 2.01            # center distance in drop radii
//!     v: [ 1.5, -0.8 ]
//!
//! walls:
//!   - x: [ 0.6, -0.2 ]
//!     r: 0.3
//!
//! wall_runs:
//!   - from: [ -1.5, -1.0 ]
//!     to:   [  1.5, -1.0 ]
//!     step: 0.25
//!     r: 0.25
//! ```
//!
//! Every section is optional. The scene is turned into a runtime
//! [`Scenario`](crate::simulation::scenario::Scenario), which validates it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Which candidate-pair source the drop interaction pass uses
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BroadPhaseConfig {
    #[default]
    #[serde(rename = "all_pairs")] // every drop against every drop, O(n^2)
    AllPairs,

    #[serde(rename = "grid")] // uniform hash grid, same force law and order
    Grid,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub broad_phase: BroadPhaseConfig,
    pub cell_size: Option<f64>, // grid cell edge, defaults to two interaction radii
}

#[derive(Deserialize, Debug, Clone)]
pub struct DropConfig {
    pub x: Vec<f64>,         // position
    pub v: Option<Vec<f64>>, // velocity, at rest when omitted
}

#[derive(Deserialize, Debug, Clone)]
pub struct BlockConfig {
    pub origin: Vec<f64>,    // center of drop (0, 0)
    pub nx: usize,           // drops per row
    pub ny: usize,           // rows
    pub spacing: f64,        // center distance in units of R
    pub v: Option<Vec<f64>>, // shared initial velocity
}

#[derive(Deserialize, Debug, Clone)]
pub struct WallConfig {
    pub x: Vec<f64>, // center
    pub r: f64,      // half-extent
}

#[derive(Deserialize, Debug, Clone)]
pub struct WallRunConfig {
    pub from: Vec<f64>, // first wall center
    pub to: Vec<f64>,   // last wall center (inclusive, within 1e-3)
    pub step: f64,      // distance between centers
    pub r: f64,         // half-extent of every wall in the run
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub drops: Vec<DropConfig>,
    #[serde(default)]
    pub blocks: Vec<BlockConfig>,
    #[serde(default)]
    pub walls: Vec<WallConfig>,
    #[serde(default)]
    pub wall_runs: Vec<WallRunConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = ScenarioConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg.engine.broad_phase, BroadPhaseConfig::AllPairs);
        assert!(cfg.engine.cell_size.is_none());
        assert!(cfg.drops.is_empty() && cfg.walls.is_empty());
    }

    #[test]
    fn parses_every_section() {
        let text = r#"
engine:
  broad_phase: "grid"
  cell_size: 0.2
drops:
  - x: [0.0, 0.5]
blocks:
  - origin: [-1.2, 0.2]
    nx: 3
    ny: 2
    spacing: 2.01
    v: [1.5, -0.8]
walls:
  - x: [0.6, -0.2]
    r: 0.3
wall_runs:
  - from: [-1.5, -1.0]
    to: [1.5, -1.0]
    step: 0.25
    r: 0.25
"#;
        let cfg = ScenarioConfig::from_yaml_str(text).unwrap();
        assert_eq!(cfg.engine.broad_phase, BroadPhaseConfig::Grid);
        assert_eq!(cfg.engine.cell_size, Some(0.2));
        assert!(cfg.drops[0].v.is_none());
        assert_eq!(cfg.blocks[0].nx * cfg.blocks[0].ny, 6);
        assert_eq!(cfg.walls[0].r, 0.3);
        assert_eq!(cfg.wall_runs[0].step, 0.25);
    }

    #[test]
    fn unknown_broad_phase_is_rejected() {
        let err = ScenarioConfig::from_yaml_str("engine:\n  broad_phase: \"octree\"\n");
        assert!(err.is_err());
    }
}
