//! scan — run the office-building lift simulation and write CSV output.
//!
//! ```text
//! scan [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! Without a config file the built-in defaults are used (10 floors, 3 cars
//! of 5, 200 guests).  Fields missing from the JSON keep their defaults.
//! Set `RUST_LOG=debug` to follow door cycles and boardings.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use lift_core::BuildingConfig;
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::BuildingBuilder;

const DEFAULT_OUTPUT_DIR: &str = "output/scan";

fn load_config(path: Option<&Path>) -> Result<BuildingConfig> {
    let Some(path) = path else {
        return Ok(BuildingConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map(PathBuf::from).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());

    let config = load_config(config_path.as_deref())?;
    println!("=== scan — lift simulation ===");
    println!(
        "Floors: {}  |  Cars: {} × {}  |  Guests: {}  |  Seed: {}",
        config.num_floors,
        config.num_elevators,
        config.elevator_capacity,
        config.max_guests,
        config.seed
    );
    println!();

    // 1. Build.
    let mut building = BuildingBuilder::new(config).build()?;

    // 2. Output.
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = SimOutputObserver::new(writer, building.clock());

    // 3. Run.
    let t0 = Instant::now();
    let summary = building.run(&mut obs)?;
    let elapsed = t0.elapsed();
    info!("simulation finished in {:.3} s", elapsed.as_secs_f64());

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    let log = building.log();
    println!("Stopped at {}", building.clock());
    println!("  guests       : {} spawned, {} left", summary.spawned, summary.left);
    println!("  requests     : {} issued", summary.requests_issued);
    println!("  rejections   : {}", summary.rejections);
    println!("  dropped      : {}", summary.dropped_requests);
    println!("  log rows     : {}", summary.log_entries);
    if let Some(wait) = log.mean_wait() {
        println!("  mean wait    : {wait:.1} ticks");
    }
    if let Some(travel) = log.mean_travel() {
        println!("  mean travel  : {travel:.1} ticks");
    }
    if !summary.completed {
        println!("  (stopped before every guest had left)");
    }
    println!("Output written to {}", output_dir.display());

    Ok(())
}
