//! # Coil Store Inspector
//!
//! Read-only view of a collision store.
//!
//! ## Usage
//!
//! ```bash
//! # List every record
//! cargo run --bin coil_inspect -- --store collisions.csv
//!
//! # Show record 3 with its breach points
//! cargo run --bin coil_inspect -- --index 3 --breaches
//! ```

use clap::Parser;
use coil_collider::store::AnomalyBrowser;
use std::path::PathBuf;

/// Coil Store Inspector
#[derive(Parser, Debug)]
#[command(name = "coil_inspect")]
#[command(about = "Summarize the records of a collision store")]
struct Args {
    /// Collision store (CSV)
    #[arg(long, short = 's', default_value = "collisions.csv")]
    store: PathBuf,

    /// Show only this record (1-based)
    #[arg(long, short = 'i')]
    index: Option<usize>,

    /// List breach points of each shown record
    #[arg(long, short = 'b')]
    breaches: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut browser = AnomalyBrowser::open(&args.store)?;

    if browser.is_empty() {
        println!("No collision records in {}", args.store.display());
        return Ok(());
    }

    let range = match args.index {
        Some(0) => return Err("record indices start at 1".into()),
        Some(k) if k > browser.len() => {
            return Err(format!("record {} out of range (store has {})", k, browser.len()).into())
        }
        Some(k) => (k - 1)..k,
        None => 0..browser.len(),
    };

    for k in range {
        browser.seek(k);
        if let Some(summary) = browser.summary() {
            println!("{}", summary);
        }
        if let Some(record) = browser.current() {
            let breaches = record.breach_points();
            println!(
                "Samples: {}, peak {:.4}, {} breach points",
                record.wave.len(),
                record.wave.peak(),
                breaches.len()
            );
            if args.breaches {
                for point in &breaches {
                    println!("  Index: {}, Amplitude: {}", point.index, point.value);
                }
            }
        }
        println!();
    }

    Ok(())
}
