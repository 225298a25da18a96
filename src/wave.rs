//! Wave Engine
//!
//! Pure functions over synthetic particle signals:
//! - [`combine_waves`]: element-wise superposition of two waves
//! - [`detect_breaches`]: samples whose magnitude exceeds
//!   [`AMPLITUDE_THRESHOLD`]
//!
//! Nothing here holds state, so every function is safe to call from any
//! number of rayon workers at once.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Samples per generated wave (one per degree of a notional cycle)
pub const WAVE_SAMPLES: usize = 360;

/// A sample breaches when `|value| > AMPLITUDE_THRESHOLD` (strict)
pub const AMPLITUDE_THRESHOLD: f32 = 1.0;

// ═══════════════════════════════════════════════════════════════════════════════
// WAVE
// ═══════════════════════════════════════════════════════════════════════════════

/// Ordered sequence of real samples; index = sample position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wave(Vec<f32>);

impl Wave {
    pub fn new(samples: Vec<f32>) -> Self {
        Self(samples)
    }

    pub fn samples(&self) -> &[f32] {
        &self.0
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.0
    }

    /// Superpose with another wave (see [`combine_waves`])
    pub fn combine(&self, other: &Wave) -> Wave {
        combine_waves(self, other)
    }

    /// Breach points of this wave (see [`detect_breaches`])
    pub fn breaches(&self) -> Vec<BreachPoint> {
        detect_breaches(self)
    }

    /// Largest absolute sample, 0 for an empty wave
    pub fn peak(&self) -> f32 {
        self.0.iter().fold(0.0f32, |acc, v| acc.max(v.abs()))
    }
}

impl Deref for Wave {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for Wave {
    fn from(samples: Vec<f32>) -> Self {
        Self(samples)
    }
}

impl FromIterator<f32> for Wave {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// BREACH POINTS
// ═══════════════════════════════════════════════════════════════════════════════

/// A sample whose magnitude exceeds the anomaly threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreachPoint {
    /// Sample index within the wave
    pub index: usize,
    /// Sample value (signed)
    pub value: f32,
}

impl BreachPoint {
    pub fn new(index: usize, value: f32) -> Self {
        Self { index, value }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENGINE
// ═══════════════════════════════════════════════════════════════════════════════

/// Element-wise sum over the shorter of the two waves.
///
/// Excess samples of the longer wave are dropped; no padding.
pub fn combine_waves(wave1: &[f32], wave2: &[f32]) -> Wave {
    wave1.iter().zip(wave2).map(|(a, b)| a + b).collect()
}

/// Every sample with `|value| > AMPLITUDE_THRESHOLD`, ascending by index.
///
/// An empty result is the "no anomaly" case, not an error.
pub fn detect_breaches(wave: &[f32]) -> Vec<BreachPoint> {
    wave.iter()
        .enumerate()
        .filter(|(_, v)| v.abs() > AMPLITUDE_THRESHOLD)
        .map(|(i, &v)| BreachPoint::new(i, v))
        .collect()
}
