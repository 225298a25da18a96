//! # Coil Collider
//!
//! Pairwise particle interaction sweep over synthetic signals.
//!
//! Every particle emits a deterministic sinusoidal wave derived from its
//! amplitude and frequency. The coil superposes the waves of every
//! particle pair, looks for samples whose magnitude breaches the anomaly
//! threshold, and appends one collision record per breaching pair to a
//! CSV store.
//!
//! ## Architecture
//!
//! ```text
//! Catalog ──► Coil (pair sweep) ──► Registry: seen? ──yes──► skip
//!                                        │ no
//!                                        ▼
//!                           Wave Engine: generate, combine, detect
//!                                        │ breaches
//!                                        ▼
//!                           Recorder ──► collisions.csv
//!                                    └─► collision_log.txt
//! ```
//!
//! The store is read back with [`store::load_records`] and browsed with
//! [`store::AnomalyBrowser`].

pub mod catalog;
pub mod config;
pub mod driver;
pub mod error;
pub mod particles;
pub mod recorder;
pub mod registry;
pub mod store;
pub mod wave;


pub use catalog::standard_catalog;
pub use config::ColliderConfig;
pub use driver::{evaluate_pair, Coil, Interaction, PairOutcome, SweepReport};
pub use error::ColliderError;
pub use particles::{Particle, ParticleType};
pub use recorder::{AnomalyRecorder, CollisionEvent, CollisionLog, CollisionRecord, CollisionStore};
pub use registry::{InteractionRegistry, PairIdentity};
pub use store::{load_records, AnomalyBrowser};
pub use wave::{combine_waves, detect_breaches, BreachPoint, Wave, AMPLITUDE_THRESHOLD, WAVE_SAMPLES};

/// Result type for collider operations
pub type ColliderResult<T> = Result<T, ColliderError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the recorder described by a configuration
pub fn recorder_for(config: &ColliderConfig) -> AnomalyRecorder {
    AnomalyRecorder::new(
        CollisionStore::new(&config.store_path),
        config.log_path.as_ref().map(CollisionLog::new),
    )
}

/// Sweep `particles` once with `config`, returning the coil for later
/// sweeps together with the report
pub fn run_sweep(
    particles: Vec<Particle>,
    config: &ColliderConfig,
) -> ColliderResult<(Coil, SweepReport)> {
    config.validate()?;
    let mut recorder = recorder_for(config);
    let mut coil = Coil::new(particles, config);
    let report = coil.sweep(&mut recorder);
    Ok((coil, report))
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        // Particles and waves
        Particle,
        ParticleType,
        Wave,
        BreachPoint,

        // Sweep
        Coil,
        ColliderConfig,
        SweepReport,
        PairIdentity,

        // Persistence
        AnomalyRecorder,
        CollisionRecord,
        AnomalyBrowser,

        // Result type
        ColliderResult,
        ColliderError,
    };
}
