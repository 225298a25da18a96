//! Coil Collider Demo
//!
//! Sweeps the standard catalog with default settings:
//! - prints every particle
//! - appends breaching pairs to `collisions.csv`
//! - writes numbered blocks to `collision_log.txt`

use coil_collider::{catalog::standard_catalog, run_sweep, ColliderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Coil Collider - Pairwise Wave Sweep             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let particles = standard_catalog();
    for particle in &particles {
        println!("{}", particle.details());
    }

    let config = ColliderConfig::default();
    let (coil, report) = run_sweep(particles, &config)?;

    println!("{}", report.summary());
    println!("Particles after sweep: {}", coil.particles().len());
    println!("Collision logging completed.");
    Ok(())
}
