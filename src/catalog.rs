//! Particle Catalog
//!
//! The fixed set of particles a sweep starts from. Catalogs can also be
//! stored as JSON arrays of particles.

use crate::error::ColliderError;
use crate::particles::{Particle, ParticleType};
use crate::ColliderResult;
use std::fs;
use std::path::Path;

/// The 21-particle standard catalog, one per named particle type
pub fn standard_catalog() -> Vec<Particle> {
    use ParticleType::*;

    vec![
        Particle::new(QuarkUp, "Up Quark", 2.0e-27, 1.6e-19, 2.5e-13, [1.0, 1.5, 0.5], 0.6, 500.0),
        Particle::new(QuarkDown, "Down Quark", 3.0e-27, -1.6e-19, 2.2e-13, [0.5, 1.0, 0.6], 0.4, 550.0),
        Particle::new(QuarkCharm, "Charm Quark", 1.3e-27, 2.0e-19, 2.0e-13, [0.8, 0.5, 0.7], 0.5, 500.0),
        Particle::new(QuarkStrange, "Strange Quark", 9.5e-30, -1.0e-19, 1.6e-13, [0.9, 0.5, 0.4], 0.6, 550.0),
        Particle::new(QuarkTop, "Top Quark", 1.8e-25, 1.602e-19, 2.0e-13, [0.1, 0.7, 0.3], 0.8, 700.0),
        Particle::new(QuarkBottom, "Bottom Quark", 4.2e-28, -1.602e-19, 1.7e-13, [0.2, 0.6, 0.5], 0.7, 600.0),
        Particle::new(LeptonElectron, "Electron", 9.1e-31, -1.602e-19, 1.0e-13, [0.99, 0.8, 0.2], 0.9, 1000.0),
        Particle::new(LeptonMuon, "Muon", 1.88e-28, -1.602e-19, 2.0e-13, [0.3, 0.5, 0.6], 0.4, 1000.0),
        Particle::new(LeptonTau, "Tau", 3.2e-27, -1.602e-19, 1.5e-13, [0.6, 0.6, 0.4], 0.7, 1200.0),
        Particle::new(LeptonNeutrinoElectron, "Electron Neutrino", 1.0e-35, 0.0, 1.0e-14, [0.1, 0.1, 0.1], 0.1, 2000.0),
        Particle::new(LeptonNeutrinoMuon, "Muon Neutrino", 1.0e-35, 0.0, 1.0e-14, [0.2, 0.2, 0.2], 0.2, 2100.0),
        Particle::new(LeptonNeutrinoTau, "Tau Neutrino", 1.0e-35, 0.0, 1.0e-14, [0.3, 0.3, 0.3], 0.3, 2200.0),
        Particle::new(LeptonPositron, "Positron", 9.1e-31, 1.602e-19, 1.0e-13, [0.95, 0.75, 0.25], 0.85, 1050.0),
        Particle::new(BosonPhoton, "Photon", 0.0, 0.0, 0.0, [0.9, 1.0, 0.1], 1.0, 1500.0),
        Particle::new(BosonZ, "Z Boson", 9.1e-26, 0.0, 2.5e-13, [0.7, 1.0, 0.2], 0.9, 1100.0),
        Particle::new(BosonW, "W Boson", 8.0e-26, 1.602e-19, 3.0e-13, [0.6, 1.0, 0.3], 0.8, 1150.0),
        Particle::new(BosonH, "Higgs Boson", 1.0e-25, 0.0, 3.0e-13, [0.5, 1.2, 0.4], 0.7, 1250.0),
        Particle::new(BosonGluon, "Gluon", 0.0, 0.0, 1.0e-13, [0.4, 0.4, 0.4], 0.5, 1300.0),
        Particle::new(ExoticX, "Exotic X", 2.0e-24, 2.0e-19, 4.0e-13, [0.8, 0.2, 0.8], 0.6, 1400.0),
        Particle::new(ExoticY, "Exotic Y", 2.5e-24, -2.0e-19, 4.5e-13, [0.2, 0.8, 0.8], 0.7, 1450.0),
        Particle::new(ExoticZ, "Exotic Z", 3.0e-24, 0.0, 5.0e-13, [0.8, 0.8, 0.2], 0.8, 1500.0),
    ]
}

/// Load a catalog from a JSON array of particles
pub fn load_catalog(path: impl AsRef<Path>) -> ColliderResult<Vec<Particle>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let particles: Vec<Particle> =
        serde_json::from_str(&text).map_err(|e| ColliderError::Serialization(e.to_string()))?;

    log::info!("Loaded {} particles from {:?}", particles.len(), path);
    Ok(particles)
}

/// Save a catalog as a pretty-printed JSON array
pub fn save_catalog(particles: &[Particle], path: impl AsRef<Path>) -> ColliderResult<()> {
    let json = serde_json::to_string_pretty(particles)
        .map_err(|e| ColliderError::Serialization(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
