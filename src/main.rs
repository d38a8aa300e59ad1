//! # Muography simulation CLI
//!
//! ```bash
//! muography --settings settings.json --output trajectories.csv
//! muography -s settings.json -o out.csv --detections hits.csv --muons 5000 --seed 7
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use muography::Simulation;
use muography::io::{read_settings, write_detections, write_trajectories};
use muography::sim::summary::RunSummary;

/// Simulates cosmic-ray muons crossing a pyramid with a hidden cavity
#[derive(Parser, Debug)]
#[command(name = "muography")]
#[command(about = "Muon transport through a pyramid with an internal cavity")]
#[command(version)]
struct Args {
    /// Settings file (JSON)
    #[arg(short, long, default_value = "settings.json")]
    settings: PathBuf,

    /// Trajectory CSV output
    #[arg(short, long, default_value = "muon_trajectories.csv")]
    output: PathBuf,

    /// Detector hits CSV output (optional)
    #[arg(short, long)]
    detections: Option<PathBuf>,

    /// Number of muons (overrides settings)
    #[arg(short, long)]
    muons: Option<usize>,

    /// Number of worker partitions (overrides settings)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Master seed (overrides settings)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut settings = read_settings(&args.settings)?;
    if let Some(n) = args.muons {
        settings.num_muons = n;
    }
    if let Some(n) = args.workers {
        settings.num_workers = n;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let simulation = Simulation::new(settings)?;
    let result = simulation.run()?;

    write_trajectories(&args.output, &result.tracks)?;
    log::info!("Trajectories written to {}", args.output.display());
    if let Some(path) = &args.detections {
        write_detections(path, &result.detections)?;
        log::info!("Detections written to {}", path.display());
    }

    print!("{}", RunSummary::new(&result));
    Ok(())
}
