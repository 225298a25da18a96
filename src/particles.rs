//! Particle Types for the Coil Collider
//!
//! Each particle carries physical attributes (mass, charge, energy), a
//! position, and the two waveform attributes that drive its synthetic
//! signal:
//!
//! ```text
//! sample[i] = amplitude * sin(frequency * i),   i = 0..360
//! ```
//!
//! The index enters the sine unnormalized, so large frequencies produce a
//! rapidly oscillating signal. This scaling is part of the store format
//! and must not change.
//!
//! # Particle Families
//!
//! | Family  | Kinds                                               |
//! |---------|-----------------------------------------------------|
//! | Quarks  | up, down, charm, strange, top, bottom               |
//! | Leptons | electron, muon, tau, three neutrinos, positron      |
//! | Bosons  | photon, Z, W, Higgs, gluon                          |
//! | Exotic  | X, Y, Z                                             |

use crate::wave::{Wave, WAVE_SAMPLES};
use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// PARTICLE TYPES
// ═══════════════════════════════════════════════════════════════════════════════

/// Kind of particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleType {
    // Quarks
    QuarkUp,
    QuarkDown,
    QuarkCharm,
    QuarkStrange,
    QuarkTop,
    QuarkBottom,

    // Leptons
    LeptonElectron,
    LeptonMuon,
    LeptonTau,
    LeptonNeutrinoElectron,
    LeptonNeutrinoMuon,
    LeptonNeutrinoTau,
    LeptonPositron,

    // Bosons
    BosonPhoton,
    BosonZ,
    BosonW,
    BosonH,
    BosonGluon,

    // Exotic
    ExoticX,
    ExoticY,
    ExoticZ,

    Unknown,
}

impl ParticleType {
    /// All named kinds, in declaration order (excludes `Unknown`)
    pub fn named() -> [ParticleType; 21] {
        [
            Self::QuarkUp,
            Self::QuarkDown,
            Self::QuarkCharm,
            Self::QuarkStrange,
            Self::QuarkTop,
            Self::QuarkBottom,
            Self::LeptonElectron,
            Self::LeptonMuon,
            Self::LeptonTau,
            Self::LeptonNeutrinoElectron,
            Self::LeptonNeutrinoMuon,
            Self::LeptonNeutrinoTau,
            Self::LeptonPositron,
            Self::BosonPhoton,
            Self::BosonZ,
            Self::BosonW,
            Self::BosonH,
            Self::BosonGluon,
            Self::ExoticX,
            Self::ExoticY,
            Self::ExoticZ,
        ]
    }

    /// Get human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::QuarkUp => "Quark Up",
            Self::QuarkDown => "Quark Down",
            Self::QuarkCharm => "Quark Charm",
            Self::QuarkStrange => "Quark Strange",
            Self::QuarkTop => "Quark Top",
            Self::QuarkBottom => "Quark Bottom",

            Self::LeptonElectron => "Electron",
            Self::LeptonMuon => "Muon",
            Self::LeptonTau => "Tau",
            Self::LeptonNeutrinoElectron => "Electron Neutrino",
            Self::LeptonNeutrinoMuon => "Muon Neutrino",
            Self::LeptonNeutrinoTau => "Tau Neutrino",
            Self::LeptonPositron => "Positron",

            Self::BosonPhoton => "Photon",
            Self::BosonZ => "Z Boson",
            Self::BosonW => "W Boson",
            Self::BosonH => "Higgs Boson",
            Self::BosonGluon => "Gluon",

            Self::ExoticX => "Exotic X",
            Self::ExoticY => "Exotic Y",
            Self::ExoticZ => "Exotic Z",

            Self::Unknown => "Unknown Particle",
        }
    }

    pub fn is_quark(&self) -> bool {
        matches!(
            self,
            Self::QuarkUp
                | Self::QuarkDown
                | Self::QuarkCharm
                | Self::QuarkStrange
                | Self::QuarkTop
                | Self::QuarkBottom
        )
    }

    pub fn is_lepton(&self) -> bool {
        matches!(
            self,
            Self::LeptonElectron
                | Self::LeptonMuon
                | Self::LeptonTau
                | Self::LeptonNeutrinoElectron
                | Self::LeptonNeutrinoMuon
                | Self::LeptonNeutrinoTau
                | Self::LeptonPositron
        )
    }

    pub fn is_boson(&self) -> bool {
        matches!(
            self,
            Self::BosonPhoton | Self::BosonZ | Self::BosonW | Self::BosonH | Self::BosonGluon
        )
    }

    pub fn is_exotic(&self) -> bool {
        matches!(self, Self::ExoticX | Self::ExoticY | Self::ExoticZ)
    }
}

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PARTICLE
// ═══════════════════════════════════════════════════════════════════════════════

/// A particle with physical and waveform attributes
///
/// Fields are private; a particle never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    #[serde(rename = "type")]
    kind: ParticleType,
    name: String,
    mass: f64,
    charge: f64,
    energy: f64,
    position: [f32; 3],
    amplitude: f32,
    frequency: f32,
}

impl Particle {
    /// Create a new particle
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: ParticleType,
        name: impl Into<String>,
        mass: f64,
        charge: f64,
        energy: f64,
        position: [f32; 3],
        amplitude: f32,
        frequency: f32,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            mass,
            charge,
            energy,
            position,
            amplitude,
            frequency,
        }
    }

    /// The placeholder particle synthesized whenever a pair breaches.
    ///
    /// Built from fixed constants; it carries no reference to the pair
    /// that produced it.
    pub fn anomalous() -> Self {
        Self::new(
            ParticleType::Unknown,
            "New Anomalous Particle",
            1.0e-28,
            1.0e-19,
            1.0e-13,
            [0.0, 0.0, 0.0],
            1.0,
            0.1,
        )
    }

    pub fn kind(&self) -> ParticleType {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn position(&self) -> [f32; 3] {
        self.position
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Generate this particle's wave: `WAVE_SAMPLES` samples of
    /// `amplitude * sin(frequency * i)`
    pub fn generate_wave(&self) -> Wave {
        (0..WAVE_SAMPLES)
            .map(|i| self.amplitude * (self.frequency * i as f32).sin())
            .collect()
    }

    /// Human-readable label of the particle type
    pub fn describe(&self) -> &'static str {
        self.kind.label()
    }

    /// Multi-line report of every attribute
    pub fn details(&self) -> String {
        let [x, y, z] = self.position;
        format!(
            "Particle: {}\n\
             Type: {}\n\
             Mass: {} kg\n\
             Charge: {} C\n\
             Energy: {} J\n\
             Position: ({}, {}, {})\n\
             Amplitude: {}\n\
             Frequency: {} Hz\n",
            self.name,
            self.describe(),
            self.mass,
            self.charge,
            self.energy,
            x,
            y,
            z,
            self.amplitude,
            self.frequency,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn up_quark() -> Particle {
        Particle::new(
            ParticleType::QuarkUp,
            "Up Quark",
            2.0e-27,
            1.6e-19,
            2.5e-13,
            [1.0, 1.5, 0.5],
            0.6,
            500.0,
        )
    }

    #[test]
    fn test_wave_length_and_origin() {
        let wave = up_quark().generate_wave();
        assert_eq!(wave.len(), WAVE_SAMPLES);
        assert_eq!(wave[0], 0.0);
    }

    #[test]
    fn test_wave_uses_unnormalized_index() {
        let p = up_quark();
        let wave = p.generate_wave();
        for i in [1usize, 7, 90, 359] {
            let expected = 0.6f32 * (500.0f32 * i as f32).sin();
            assert!((wave[i] - expected).abs() < 1e-6, "sample {}", i);
        }
    }

    #[test]
    fn test_wave_bounded_by_amplitude() {
        let p = up_quark();
        assert!(p
            .generate_wave()
            .iter()
            .all(|v| v.abs() <= p.amplitude() + 1e-6));
    }

    #[test]
    fn test_zero_amplitude_is_flat() {
        let p = Particle::new(
            ParticleType::BosonPhoton,
            "Silent",
            0.0,
            0.0,
            0.0,
            [0.0; 3],
            0.0,
            1500.0,
        );
        assert!(p.generate_wave().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ParticleType::QuarkUp.label(), "Quark Up");
        assert_eq!(ParticleType::LeptonNeutrinoTau.label(), "Tau Neutrino");
        assert_eq!(ParticleType::BosonH.label(), "Higgs Boson");
        assert_eq!(ParticleType::ExoticZ.to_string(), "Exotic Z");
        assert_eq!(ParticleType::Unknown.label(), "Unknown Particle");
        assert_eq!(up_quark().describe(), "Quark Up");
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<&str> = ParticleType::named().iter().map(|t| t.label()).collect();
        labels.push(ParticleType::Unknown.label());
        let n = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), n);
    }

    #[test]
    fn test_families_partition_named_kinds() {
        for kind in ParticleType::named() {
            let hits = [
                kind.is_quark(),
                kind.is_lepton(),
                kind.is_boson(),
                kind.is_exotic(),
            ]
            .iter()
            .filter(|&&b| b)
            .count();
            assert_eq!(hits, 1, "{:?}", kind);
        }
        assert!(!ParticleType::Unknown.is_quark());
    }

    #[test]
    fn test_anomalous_particle() {
        let p = Particle::anomalous();
        assert_eq!(p.kind(), ParticleType::Unknown);
        assert_eq!(p.name(), "New Anomalous Particle");
        assert_eq!(p.energy(), 1.0e-13);
        assert_eq!(p.amplitude(), 1.0);
    }

    #[test]
    fn test_details() {
        let text = up_quark().details();
        assert!(text.starts_with("Particle: Up Quark\n"));
        assert!(text.contains("Type: Quark Up"));
        assert!(text.contains("Frequency: 500 Hz"));
    }

    #[test]
    fn test_serde_uses_type_key() {
        let json = serde_json::to_string(&up_quark()).unwrap();
        assert!(json.contains("\"type\":\"QuarkUp\""));
        let back: Particle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, up_quark());
    }
}
