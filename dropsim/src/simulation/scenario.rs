//! Build a ready-to-step scene from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`:
//! - engine settings (`Engine`)
//! - the seeded `World` (drops and walls in file order)
//! - the candidate-pair source picked by the engine
//!
//! In the viewer this is inserted into Bevy as a `Resource` and stepped
//! once per paced frame.

#[cfg(feature = "viewer")]
use bevy::prelude::Resource;
use tracing::{debug, info};

use crate::configuration::config::{BroadPhaseConfig, ScenarioConfig};
use crate::error::{Result, SceneError};
use crate::simulation::engine::Engine;
use crate::simulation::integrator::leapfrog_step;
use crate::simulation::neighbors::{AllPairs, NeighborSearch};
use crate::simulation::params::R;
use crate::simulation::spatial_grid::{default_cell_size, SpatialGrid};
use crate::simulation::states::{Drop, NVec2, Wall, World};

/// A seeded world plus everything needed to advance it
#[cfg_attr(feature = "viewer", derive(Resource))]
pub struct Scenario {
    pub engine: Engine,
    pub world: World,
    neighbors: Box<dyn NeighborSearch + Send + Sync>,
    steps: u64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let mut world = World::default();

        // Drops: explicit ones first, then lattice blocks
        for (i, dc) in cfg.drops.iter().enumerate() {
            let x = vec2(&format!("drops[{i}].x"), &dc.x)?;
            let v = opt_vec2(&format!("drops[{i}].v"), dc.v.as_deref())?;
            world.push_drop(Drop::new(x, v));
        }

        for (i, bc) in cfg.blocks.iter().enumerate() {
            let origin = vec2(&format!("blocks[{i}].origin"), &bc.origin)?;
            let v = opt_vec2(&format!("blocks[{i}].v"), bc.v.as_deref())?;
            if !bc.spacing.is_finite() || bc.spacing <= 0.0 {
                return Err(SceneError::InvalidSpacing { index: i, spacing: bc.spacing });
            }
            let pitch = R * bc.spacing;
            // row by row, left to right
            for row in 0..bc.ny {
                for col in 0..bc.nx {
                    let x = origin + NVec2::new(pitch * col as f64, pitch * row as f64);
                    world.push_drop(Drop::new(x, v));
                }
            }
        }

        // Walls: explicit ones first, then runs
        for (i, wc) in cfg.walls.iter().enumerate() {
            let x = vec2(&format!("walls[{i}].x"), &wc.x)?;
            if !wc.r.is_finite() || wc.r <= 0.0 {
                return Err(SceneError::InvalidWallRadius { index: i, r: wc.r });
            }
            world.push_wall(Wall { x, r: wc.r });
        }

        for (i, rc) in cfg.wall_runs.iter().enumerate() {
            let from = vec2(&format!("wall_runs[{i}].from"), &rc.from)?;
            let to = vec2(&format!("wall_runs[{i}].to"), &rc.to)?;
            if !rc.step.is_finite() || rc.step <= 0.0 {
                return Err(SceneError::InvalidWallRun { index: i, reason: "step must be > 0" });
            }
            if !rc.r.is_finite() || rc.r <= 0.0 {
                return Err(SceneError::InvalidWallRun { index: i, reason: "radius must be > 0" });
            }
            for x in wall_run_centers(from, to, rc.step) {
                world.push_wall(Wall { x, r: rc.r });
            }
        }

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            broad_phase: cfg.engine.broad_phase,
            cell_size: cfg.engine.cell_size.unwrap_or_else(default_cell_size),
        };

        Self::from_world(world, engine)
    }

    /// Wrap an already seeded world
    pub fn from_world(world: World, engine: Engine) -> Result<Self> {
        let neighbors: Box<dyn NeighborSearch + Send + Sync> = match engine.broad_phase {
            BroadPhaseConfig::AllPairs => Box::new(AllPairs),
            BroadPhaseConfig::Grid => Box::new(SpatialGrid::new(engine.cell_size)?),
        };

        Ok(Self {
            engine,
            world,
            neighbors,
            steps: 0,
        })
    }

    /// Log what was seeded
    ///
    /// Called by the drivers once a subscriber is installed; in the viewer
    /// that only happens when Bevy's `LogPlugin` starts.
    pub fn log_summary(&self) {
        info!(
            drops = self.world.drops().len(),
            walls = self.world.walls().len(),
            broad_phase = ?self.engine.broad_phase,
            "scene built"
        );
    }

    /// Advance one step and return the energy diagnostic
    pub fn step(&mut self) -> f64 {
        let energy = leapfrog_step(&mut self.world, self.neighbors.as_mut());
        self.steps += 1;
        debug!(step = self.steps, energy, "step");
        energy
    }

    /// Steps taken since the scene was built
    pub fn step_count(&self) -> u64 {
        self.steps
    }
}

fn vec2(field: &str, values: &[f64]) -> Result<NVec2> {
    let [x, y] = values else {
        return Err(SceneError::VectorLength {
            field: field.to_string(),
            len: values.len(),
        });
    };
    if !x.is_finite() || !y.is_finite() {
        return Err(SceneError::NonFinite(field.to_string()));
    }
    Ok(NVec2::new(*x, *y))
}

fn opt_vec2(field: &str, values: Option<&[f64]>) -> Result<NVec2> {
    match values {
        Some(v) => vec2(field, v),
        None => Ok(NVec2::zeros()),
    }
}

/// Centers from `from` toward `to`, `step` apart, including `to` within 1e-3
fn wall_run_centers(from: NVec2, to: NVec2, step: f64) -> Vec<NVec2> {
    let span = to - from;
    let len = span.norm();
    if len == 0.0 {
        return vec![from];
    }
    let dir = span / len;
    let count = ((len + 1e-3) / step).floor() as usize + 1;
    (0..count).map(|k| from + dir * (step * k as f64)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn summary_is_logged_on_demand_not_while_building() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let cfg = ScenarioConfig::from_yaml_str("drops:\n  - x: [0.0, 0.5]\n").unwrap();
        tracing::subscriber::with_default(subscriber, || {
            let scenario = Scenario::build_scenario(cfg).unwrap();
            assert!(captured.0.lock().unwrap().is_empty(), "building logged early");
            scenario.log_summary();
        });

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("scene built"), "{text}");
        assert!(text.contains("drops=1"), "{text}");
    }

    #[test]
    fn wall_run_includes_both_ends() {
        let centers = wall_run_centers(NVec2::new(-1.5, -1.0), NVec2::new(1.5, -1.0), 0.25);
        assert_eq!(centers.len(), 13);
        assert!((centers[12].x - 1.5).abs() < 1e-9);
        assert!(centers.iter().all(|c| c.y == -1.0));
    }

    #[test]
    fn zero_length_run_is_a_single_wall() {
        let p = NVec2::new(0.3, 0.4);
        assert_eq!(wall_run_centers(p, p, 0.25), vec![p]);
    }
}
