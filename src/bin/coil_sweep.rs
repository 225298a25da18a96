//! # Coil Sweep CLI
//!
//! Run one pairwise interaction sweep and append breaching pairs to the
//! collision store.
//!
//! ## Usage
//!
//! ```bash
//! # Standard catalog, default files (collisions.csv, collision_log.txt)
//! cargo run --bin coil_sweep
//!
//! # Custom catalog and store, evaluated in parallel
//! cargo run --release --bin coil_sweep -- \
//!     --catalog particles.json \
//!     --store out/collisions.csv \
//!     --parallel
//!
//! # Settings from a JSON config, auxiliary log disabled
//! cargo run --bin coil_sweep -- --config collider.json --no-log
//! ```

use clap::Parser;
use coil_collider::{
    catalog::{load_catalog, save_catalog, standard_catalog},
    config::ColliderConfig,
    registry::PairIdentity,
    run_sweep,
};
use std::path::PathBuf;

/// Coil Collider Sweep
#[derive(Parser, Debug)]
#[command(name = "coil_sweep")]
#[command(about = "Sweep every particle pair and record amplitude breaches")]
struct Args {
    /// JSON configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// JSON particle catalog (defaults to the standard 21-particle catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write the catalog used for this sweep to a JSON file
    #[arg(long)]
    dump_catalog: Option<PathBuf>,

    /// Collision store (CSV)
    #[arg(long, short = 's')]
    store: Option<PathBuf>,

    /// Auxiliary plain-text collision log
    #[arg(long, short = 'l')]
    log: Option<PathBuf>,

    /// Do not write the auxiliary collision log
    #[arg(long, conflicts_with = "log")]
    no_log: bool,

    /// Evaluate pairs in parallel
    #[arg(long, short = 'p')]
    parallel: bool,

    /// Build pair ids in encounter order instead of sorting names
    #[arg(long)]
    legacy_ids: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ColliderConfig::from_json_file(path)?,
        None => ColliderConfig::default(),
    };
    if let Some(store) = args.store {
        config.store_path = store;
    }
    if let Some(log) = args.log {
        config.log_path = Some(log);
    }
    if args.no_log {
        config.log_path = None;
    }
    if args.parallel {
        config.parallel = true;
    }
    if args.legacy_ids {
        config.pair_identity = PairIdentity::EncounterOrder;
    }

    let particles = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => standard_catalog(),
    };
    if let Some(path) = &args.dump_catalog {
        save_catalog(&particles, path)?;
        println!("[CATALOG] Wrote {} particles to {}", particles.len(), path.display());
    }

    println!("[STORE] {}", config.store_path.display());
    if let Some(log) = &config.log_path {
        println!("[LOG]   {}", log.display());
    }

    let (_coil, report) = run_sweep(particles, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("[DONE]  {}", report.summary());
    }

    if report.failed > 0 {
        eprintln!("[WARN]  {} records could not be written", report.failed);
    }

    Ok(())
}
