use orbsim::{solar_system, Scenario, ScenarioConfig};
use orbsim::{bench_tick, run_3d};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Newtonian N-body solar system simulator")]
struct Args {
    /// Scenario YAML; bare names are looked up under ./scenarios
    #[arg(short, long)]
    file: Option<String>,

    /// Run this many ticks without a window and print a summary
    #[arg(long)]
    headless: Option<u64>,

    /// Override the initial speed multiplier
    #[arg(short, long)]
    speed: Option<f64>,

    /// Print tick timings for growing body counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file: Option<&str>) -> Result<ScenarioConfig> {
    let Some(file_name) = file else {
        info!("no scenario file given, using built-in solar system");
        return Ok(solar_system());
    };

    let mut config_path = PathBuf::from(file_name);
    if !config_path.exists() {
        config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    }

    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let cfg = ScenarioConfig::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    info!("loaded scenario {} ({} bodies)", config_path.display(), cfg.bodies.len());
    Ok(cfg)
}

fn run_headless(scenario: &mut Scenario, ticks: u64) {
    let sim = &mut scenario.controller;
    let e0 = sim.total_energy();
    let p0 = sim.total_momentum();

    sim.run(ticks);

    println!("ticks: {}, simulated days: {:.1}", sim.tick_count(), sim.elapsed() / orbsim::DAY_SECONDS);
    for b in sim.bodies() {
        let p = b.position();
        println!(
            "{:>10}  r = {:>12.4e} m  |v| = {:>10.1} m/s  pos = [{:.4e}, {:.4e}, {:.4e}]",
            b.name().unwrap_or("?"),
            p.norm(),
            b.velocity().norm(),
            p.x,
            p.y,
            p.z,
        );
    }
    println!("energy drift:   {:.3e} J", sim.total_energy() - e0);
    println!("momentum drift: {:.3e} kg m/s", (sim.total_momentum() - p0).norm());
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let scenario_cfg = load_scenario(args.file.as_deref())?;
    let mut scenario = Scenario::build(scenario_cfg).context("invalid scenario")?;

    if let Some(speed) = args.speed {
        scenario.controller.set_speed(speed)?;
    }

    match args.headless {
        Some(ticks) => run_headless(&mut scenario, ticks),
        None => run_3d(scenario),
    }

    Ok(())
}
