//! Pairwise Interaction Driver
//!
//! Sweeps every unordered particle pair `(i, j)`, `i < j`, once:
//!
//! ```text
//!   INIT ──► ENUMERATING ──► per pair:
//!                              CHECK_SEEN ──► SKIP
//!                                  │
//!                                  ▼
//!                              EVALUATE ──► NONE
//!                                  │
//!                                  ▼
//!                              BREACH ──► PERSIST
//!            ──► DONE
//! ```
//!
//! The pair universe is fixed to the particles present when the sweep
//! starts. Particles synthesized from breaching pairs are appended after
//! the sweep and only take part in later sweeps.
//!
//! In parallel mode, wave evaluation runs on the rayon pool while the
//! registry and the recorder are only touched from the calling thread, in
//! enumeration order. Only breaching interactions are held until they are
//! persisted. Both modes produce byte-identical stores.

use crate::config::ColliderConfig;
use crate::particles::Particle;
use crate::recorder::{AnomalyRecorder, CollisionEvent, CollisionRecord};
use crate::registry::InteractionRegistry;
use crate::wave::{BreachPoint, Wave};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// PAIR EVALUATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Combined wave of a pair and its breach points
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub wave: Wave,
    pub breaches: Vec<BreachPoint>,
}

impl Interaction {
    pub fn is_anomalous(&self) -> bool {
        !self.breaches.is_empty()
    }
}

/// Generate both waves, superpose them and look for breaches
pub fn evaluate_pair(p1: &Particle, p2: &Particle) -> Interaction {
    let wave = p1.generate_wave().combine(&p2.generate_wave());
    let breaches = wave.breaches();
    Interaction { wave, breaches }
}

/// What happened to one pair during a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Pair id already in the registry
    Skipped,
    /// Evaluated, no breach
    Quiet,
    /// Breach persisted under this collision number
    Recorded(u64),
    /// Breach detected but the store append failed
    Failed,
}

/// Counters for one sweep
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Pairs enumerated
    pub pairs: usize,
    /// Pairs skipped as already seen
    pub skipped: usize,
    /// Pairs whose waves were evaluated
    pub evaluated: usize,
    /// Evaluated pairs with at least one breach
    pub anomalies: usize,
    /// Records persisted to the store
    pub recorded: usize,
    /// Records lost to store failures
    pub failed: usize,
    /// Anomalous particles appended after the sweep
    pub spawned: usize,
}

impl SweepReport {
    fn tally(&mut self, outcome: PairOutcome) {
        match outcome {
            PairOutcome::Skipped => self.skipped += 1,
            PairOutcome::Quiet => self.evaluated += 1,
            PairOutcome::Recorded(_) => {
                self.evaluated += 1;
                self.anomalies += 1;
                self.recorded += 1;
            }
            PairOutcome::Failed => {
                self.evaluated += 1;
                self.anomalies += 1;
                self.failed += 1;
            }
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} pairs: {} evaluated, {} skipped, {} anomalies ({} recorded, {} failed), {} spawned",
            self.pairs,
            self.evaluated,
            self.skipped,
            self.anomalies,
            self.recorded,
            self.failed,
            self.spawned
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COIL
// ═══════════════════════════════════════════════════════════════════════════════

/// Particle collection plus the registry of pairs already evaluated
#[derive(Debug)]
pub struct Coil {
    particles: Vec<Particle>,
    registry: InteractionRegistry,
    interaction_info: String,
    parallel: bool,
    spawn_anomalous: bool,
}

impl Coil {
    pub fn new(particles: Vec<Particle>, config: &ColliderConfig) -> Self {
        Self {
            particles,
            registry: InteractionRegistry::new(config.pair_identity),
            interaction_info: config.interaction_info.clone(),
            parallel: config.parallel,
            spawn_anomalous: config.spawn_anomalous,
        }
    }

    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn registry(&self) -> &InteractionRegistry {
        &self.registry
    }

    /// Check, evaluate and (on breach) persist the pair `(i, j)`.
    ///
    /// # Panics
    /// If `i` or `j` is out of bounds.
    pub fn interact(&mut self, i: usize, j: usize, recorder: &mut AnomalyRecorder) -> PairOutcome {
        let (p1, p2) = (&self.particles[i], &self.particles[j]);
        let id = self.registry.canonical_id(p1, p2);
        if self.registry.has_seen(&id) {
            log::debug!("Skipping {}: already evaluated", id);
            return PairOutcome::Skipped;
        }
        self.registry.mark_seen(id);

        let interaction = evaluate_pair(p1, p2);
        persist(p1, p2, interaction, &self.interaction_info, recorder)
    }

    /// Run one sweep over every unordered pair present at the start.
    ///
    /// Store failures are logged and counted; they never stop the sweep.
    pub fn sweep(&mut self, recorder: &mut AnomalyRecorder) -> SweepReport {
        let n = self.particles.len();
        let mut report = SweepReport {
            pairs: n * n.saturating_sub(1) / 2,
            ..SweepReport::default()
        };

        log::info!(
            "Sweeping {} particles ({} pairs{})",
            n,
            report.pairs,
            if self.parallel { ", parallel" } else { "" }
        );

        if self.parallel {
            self.sweep_parallel(n, recorder, &mut report);
        } else {
            for i in 0..n {
                for j in (i + 1)..n {
                    let outcome = self.interact(i, j, recorder);
                    report.tally(outcome);
                }
            }
        }

        if self.spawn_anomalous {
            report.spawned = report.anomalies;
            self.particles
                .extend(std::iter::repeat_with(Particle::anomalous).take(report.anomalies));
        }

        log::info!("Sweep complete: {}", report.summary());
        report
    }

    fn sweep_parallel(&mut self, n: usize, recorder: &mut AnomalyRecorder, report: &mut SweepReport) {
        let mut pending = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let id = self
                    .registry
                    .canonical_id(&self.particles[i], &self.particles[j]);
                if self.registry.has_seen(&id) {
                    log::debug!("Skipping {}: already evaluated", id);
                    report.tally(PairOutcome::Skipped);
                    continue;
                }
                self.registry.mark_seen(id);
                pending.push((i, j));
            }
        }

        // Quiet waves are dropped on the worker; only breaching pairs come back
        let particles = &self.particles;
        let anomalies: Vec<(usize, usize, Interaction)> = pending
            .par_iter()
            .filter_map(|&(i, j)| {
                let interaction = evaluate_pair(&particles[i], &particles[j]);
                interaction.is_anomalous().then_some((i, j, interaction))
            })
            .collect();

        for _ in anomalies.len()..pending.len() {
            report.tally(PairOutcome::Quiet);
        }
        for (i, j, interaction) in anomalies {
            let outcome = persist(
                &particles[i],
                &particles[j],
                interaction,
                &self.interaction_info,
                recorder,
            );
            report.tally(outcome);
        }
    }
}

fn persist(
    p1: &Particle,
    p2: &Particle,
    interaction: Interaction,
    info: &str,
    recorder: &mut AnomalyRecorder,
) -> PairOutcome {
    if !interaction.is_anomalous() {
        return PairOutcome::Quiet;
    }

    log::debug!(
        "Anomaly: {} + {} breaches at {} samples (peak {})",
        p1.name(),
        p2.name(),
        interaction.breaches.len(),
        interaction.wave.peak()
    );

    let event = CollisionEvent::from_pair(p1, p2, &Particle::anomalous(), interaction.breaches);
    let record = CollisionRecord::new(p1.name(), p2.name(), info, interaction.wave);

    match recorder.record(&record, &event) {
        Ok(number) => PairOutcome::Recorded(number),
        Err(e) => {
            log::error!(
                "Error logging collision {} - {} to {:?}: {}",
                p1.name(),
                p2.name(),
                recorder.store().path(),
                e
            );
            PairOutcome::Failed
        }
    }
}
