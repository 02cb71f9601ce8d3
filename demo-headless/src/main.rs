use clap::Parser;
use freefall_core::{FreeFallSimulation, Point, SimulationConfig, SimulationError, Vector};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Thrown-ball free-fall demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "freefall-demo")]
#[command(about = "Throw a ball and step it until it hits the ground", long_about = None)]
struct Args {
    /// JSON config file (timestep, gravity, applied_force, max_ticks)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch height in meters
    #[arg(long, default_value_t = 50.0)]
    height: f64,

    /// Initial horizontal velocity in m/s
    #[arg(long, default_value_t = 30.0)]
    vx: f64,

    /// Initial vertical velocity in m/s
    #[arg(long, default_value_t = 10.0)]
    vy: f64,

    /// Ball mass in kg
    #[arg(short, long, default_value_t = 5.0)]
    mass: f64,

    /// Time step in seconds (overrides the config file)
    #[arg(short, long)]
    timestep: Option<f64>,

    /// Maximum number of ticks (overrides the config file)
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,
}

fn build_config(args: &Args) -> Result<SimulationConfig, SimulationError> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            SimulationConfig::load(path)?
        }
        None => SimulationConfig::default(),
    };
    if let Some(dt) = args.timestep {
        config.timestep = dt;
    }
    if let Some(max_ticks) = args.max_ticks {
        config.max_ticks = max_ticks;
    }
    Ok(config)
}

fn run(args: &Args) -> Result<(), SimulationError> {
    let config = build_config(args)?;
    let mut sim = FreeFallSimulation::launch(
        args.mass,
        Point::new(0.0, args.height, 0.0),
        Vector::new(args.vx, args.vy, 0.0),
        config,
    )?;

    println!("=== Free-Fall Demo ===\n");
    println!(
        "Time step: {} s, gravity: {}, tick cap: {}\n",
        config.timestep, config.gravity, config.max_ticks
    );

    let mass = *sim.object().mass();
    let trajectory = sim.run();

    if !args.quiet {
        for sample in &trajectory.samples {
            println!(
                "Mass: {}\nPosition: {}\nVelocity: {}",
                mass, sample.position, sample.velocity
            );
            println!("{}", sample.tick);
        }
    }

    println!("\n=== Summary ===");
    if trajectory.landed {
        println!(
            "Landed after {} ticks ({:.3} s)",
            trajectory.ticks,
            sim.elapsed_time()
        );
    } else {
        println!("Still airborne after {} ticks", trajectory.ticks);
    }
    if let Some(position) = trajectory.final_position() {
        println!("Final position: {position}");
    }
    if let Some(apex) = trajectory.apex_height() {
        println!("Apex height: {apex:.3} m");
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
