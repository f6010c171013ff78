//! Headless driver: paced step loop with energy logging

use tracing::{info, warn};

use crate::simulation::pacing::FramePacer;
use crate::simulation::params::FRAME_RATE;
use crate::simulation::scenario::Scenario;

/// Step `scenario` at [`FRAME_RATE`] until `max_steps` (forever if `None`)
///
/// Returns the energy reported by the last step, 0.0 if none ran.
pub fn run_headless(scenario: &mut Scenario, max_steps: Option<u64>) -> f64 {
    run_paced(scenario, &mut FramePacer::new(FRAME_RATE), max_steps)
}

/// Same loop with a caller-supplied gate
pub fn run_paced(scenario: &mut Scenario, pacer: &mut FramePacer, max_steps: Option<u64>) -> f64 {
    scenario.log_summary();
    info!(interval = ?pacer.interval(), "run_headless: starting");

    let mut energy = 0.0;
    let mut warned = false;
    let mut taken = 0u64;

    while max_steps.map_or(true, |max| taken < max) {
        pacer.wait();
        energy = scenario.step();
        taken += 1;

        info!("System energy: {:.2}", energy);
        if !energy.is_finite() && !warned {
            warn!(step = scenario.step_count(), "energy diagnostic is no longer finite");
            warned = true;
        }
    }

    energy
}
