//! rekha-replay - replay recorded pose / measurement cycles into a street map
//!
//! Loads the mapper configuration and a YAML recording, feeds every cycle
//! through a [`StreetMapper`] and reports what the map looks like at the end.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use rekha_map::{Recording, RekhaConfig, StreetMapper};

/// Replay a recording into an occupancy grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recording file (YAML)
    recording: String,

    /// Configuration file path
    #[arg(short, long, default_value = "configs/config.yaml")]
    config: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = Path::new(&args.config);
    let config = if config_path.exists() {
        log::info!("Loading configuration from {:?}", config_path);
        RekhaConfig::load(config_path)?
    } else {
        log::info!("Config not found at {:?}, using defaults", config_path);
        RekhaConfig::default()
    };

    let recording = Recording::load(Path::new(&args.recording))?;
    log::info!(
        "Replaying '{}': {} cycles, {} measurements",
        recording.name,
        recording.cycles.len(),
        recording.measurement_count()
    );

    let mut mapper = StreetMapper::new(&config)?;
    let mut last_snapshot = None;

    for (i, cycle) in recording.cycles.iter().enumerate() {
        if let Some(pose) = cycle.pose {
            mapper.on_pose(pose)?;
        }
        if let Some(output) = mapper.on_measurements(&cycle.measurements) {
            log::debug!(
                "Cycle {}: {} occupied cells published",
                i,
                output.snapshot.occupied_count()
            );
            last_snapshot = Some(output.snapshot);
        }
    }

    let stats = mapper.stats();
    let snapshot = last_snapshot.unwrap_or_else(|| mapper.snapshot());

    println!("Recording:         {}", recording.name);
    println!(
        "Grid:              {}x{} cells at {:.3}m",
        snapshot.width, snapshot.height, snapshot.resolution
    );
    println!("Cycles applied:    {}", stats.cycles_applied);
    println!("Cycles skipped:    {}", stats.cycles_without_pose + stats.cycles_empty);
    println!("Rays traced:       {}", stats.totals.rays);
    println!("Rays rejected:     {}", stats.totals.rays_rejected);
    println!("Cells updated:     {}", stats.totals.cells_updated());
    println!("Updates discarded: {}", stats.totals.cells_discarded);
    println!("Observed cells:    {}", mapper.map().observed_cells());
    println!("Occupied cells:    {}", snapshot.occupied_count());

    Ok(())
}
