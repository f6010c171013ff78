use dropsim::{ScenarioConfig, Scenario};
use dropsim::{bench_interaction, bench_step_curve, run_headless};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Step in the terminal instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Stop after this many steps (headless only)
    #[arg(long)]
    steps: Option<u64>,

    /// Run the broad-phase timing comparison and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    // the viewer brings its own subscriber through Bevy's LogPlugin
    let windowed = cfg!(feature = "viewer") && !args.headless && !args.bench;
    if !windowed {
        init_logging();
    }

    if args.bench {
        bench_interaction()?;
        bench_step_curve()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if windowed {
        #[cfg(feature = "viewer")]
        dropsim::run_2d(scenario);
    } else {
        run_headless(&mut scenario, args.steps);
    }

    Ok(())
}
