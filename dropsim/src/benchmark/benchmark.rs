use std::time::Instant;

use crate::configuration::config::BroadPhaseConfig;
use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::params::R;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Drop, NVec2, Wall, World};

/// Square lattice of `n` drops resting just above a floor, 2.01R apart
fn make_world(n: usize) -> World {
    let side = (n as f64).sqrt().ceil() as usize;
    let pitch = 2.01 * R;

    let drops = (0..n)
        .map(|i| {
            let (col, row) = (i % side, i / side);
            Drop::new(
                NVec2::new(pitch * col as f64 - 1.0, pitch * row as f64 - 0.7),
                NVec2::new(0.3, 0.0),
            )
        })
        .collect();

    let walls = (0..=20)
        .map(|k| Wall::new(-2.5 + 0.25 * k as f64, -1.0, 0.25))
        .collect();

    World::new(drops, walls)
}

fn make_scenario(world: World, broad_phase: BroadPhaseConfig) -> Result<Scenario> {
    let engine = Engine {
        broad_phase,
        ..Engine::default()
    };
    Scenario::from_world(world, engine)
}

/// Time `steps` steps, returns milliseconds per step
fn time_steps(scenario: &mut Scenario, steps: usize) -> f64 {
    // Warm up
    scenario.step();

    let t0 = Instant::now();
    for _ in 0..steps {
        scenario.step();
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps as f64
}

/// All-pairs vs. grid broad phase per-step time for growing N
pub fn bench_interaction() -> Result<()> {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 5;

    for n in ns {
        let world = make_world(n);

        let mut direct = make_scenario(world.clone(), BroadPhaseConfig::AllPairs)?;
        let ms_direct = time_steps(&mut direct, steps);

        let mut grid = make_scenario(world, BroadPhaseConfig::Grid)?;
        let ms_grid = time_steps(&mut grid, steps);

        println!("N = {n:5}, all pairs step = {ms_direct:9.4} ms, grid step = {ms_grid:9.4} ms");
    }
    Ok(())
}

/// Same comparison as CSV, for plotting
pub fn bench_step_curve() -> Result<()> {
    println!("N,all_pairs_ms,grid_ms");

    for n in (200..=4000).step_by(200) {
        // Large n: one step, all pairs is slow
        let steps = if n <= 1000 { 5 } else { 1 };
        let world = make_world(n);

        let mut direct = make_scenario(world.clone(), BroadPhaseConfig::AllPairs)?;
        let ms_direct = time_steps(&mut direct, steps);

        let mut grid = make_scenario(world, BroadPhaseConfig::Grid)?;
        let ms_grid = time_steps(&mut grid, steps);

        println!("{},{:.6},{:.6}", n, ms_direct, ms_grid);
    }
    Ok(())
}
