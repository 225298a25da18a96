//! Anomaly Recorder
//!
//! Persists breaching interactions to two append-only files:
//!
//! ```text
//! collisions.csv       machine-readable collision store
//! ├── Particle1,Particle2,InteractionInfo,WaveData      (header, once)
//! └── name1,name2,info,w0,w1,...,w359                   (one per record)
//!
//! collision_log.txt    human-readable block per collision
//! ```
//!
//! The recorder does not deduplicate. Callers consult the
//! [`InteractionRegistry`](crate::registry::InteractionRegistry) before
//! calling [`AnomalyRecorder::record`].

use crate::error::ColliderError;
use crate::particles::Particle;
use crate::wave::{detect_breaches, BreachPoint, Wave};
use crate::ColliderResult;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Header row, written once when the store is empty
pub const STORE_HEADER: [&str; 4] = ["Particle1", "Particle2", "InteractionInfo", "WaveData"];

/// Default interaction descriptor for a breaching pair
pub const ANOMALY_DETECTED: &str = "Anomaly Detected";

// ═══════════════════════════════════════════════════════════════════════════════
// COLLISION RECORD
// ═══════════════════════════════════════════════════════════════════════════════

/// One anomalous pairwise interaction, including the full combined wave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionRecord {
    pub particle1: String,
    pub particle2: String,
    pub interaction_info: String,
    pub wave: Wave,
}

impl CollisionRecord {
    pub fn new(
        particle1: impl Into<String>,
        particle2: impl Into<String>,
        interaction_info: impl Into<String>,
        wave: Wave,
    ) -> Self {
        Self {
            particle1: particle1.into(),
            particle2: particle2.into(),
            interaction_info: interaction_info.into(),
            wave,
        }
    }

    /// Breach points of the stored wave
    pub fn breach_points(&self) -> Vec<BreachPoint> {
        detect_breaches(&self.wave)
    }

    /// Text fields must survive a plain comma split of a single line, and
    /// a row always carries at least one wave sample.
    pub fn validate(&self) -> ColliderResult<()> {
        if self.wave.is_empty() {
            return Err(ColliderError::InvalidRecord(format!(
                "{} - {} has no wave samples",
                self.particle1, self.particle2
            )));
        }
        for (label, field) in [
            ("particle1", &self.particle1),
            ("particle2", &self.particle2),
            ("interaction info", &self.interaction_info),
        ] {
            if field.contains([',', '\n', '\r']) {
                return Err(ColliderError::InvalidRecord(format!(
                    "{} {:?} contains a delimiter or line break",
                    label, field
                )));
            }
        }
        Ok(())
    }

    /// Store row: three text fields followed by one field per sample
    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(3 + self.wave.len());
        fields.push(self.particle1.clone());
        fields.push(self.particle2.clone());
        fields.push(self.interaction_info.clone());
        fields.extend(self.wave.iter().map(|v| v.to_string()));
        fields
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COLLISION STORE
// ═══════════════════════════════════════════════════════════════════════════════

/// Append-only CSV collision store
#[derive(Debug, Clone)]
pub struct CollisionStore {
    path: PathBuf,
}

impl CollisionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first if the store is empty.
    ///
    /// Header check and append happen on the same handle; callers that
    /// share a store across threads must hold a lock around this call.
    pub fn append(&self, record: &CollisionRecord) -> ColliderResult<()> {
        record.validate()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);

        if needs_header {
            writer.write_record(STORE_HEADER)?;
        }
        writer.write_record(record.to_fields())?;
        writer.flush()?;

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// AUXILIARY COLLISION LOG
// ═══════════════════════════════════════════════════════════════════════════════

/// Energy/mass bookkeeping for one persisted collision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub initial_energy: f64,
    pub final_energy: f64,
    pub initial_mass: f64,
    pub final_mass: f64,
    pub breach_points: Vec<BreachPoint>,
}

impl CollisionEvent {
    /// Pair goes in; pair plus product comes out.
    pub fn from_pair(
        p1: &Particle,
        p2: &Particle,
        product: &Particle,
        breach_points: Vec<BreachPoint>,
    ) -> Self {
        let initial_energy = p1.energy() + p2.energy();
        let initial_mass = p1.mass() + p2.mass();
        Self {
            initial_energy,
            final_energy: initial_energy + product.energy(),
            initial_mass,
            final_mass: initial_mass + product.mass(),
            breach_points,
        }
    }

    pub fn energy_difference(&self) -> f64 {
        self.final_energy - self.initial_energy
    }

    pub fn mass_difference(&self) -> f64 {
        self.final_mass - self.initial_mass
    }

    /// Render the human-readable block for collision number `number`
    pub fn render(&self, number: u64) -> String {
        let mut block = format!(
            "Collision #{}\n\
             Initial Energy: {} GeV\n\
             Final Energy: {} GeV\n\
             Energy Difference: {} GeV\n\
             Initial Mass: {} GeV/c^2\n\
             Final Mass: {} GeV/c^2\n\
             Mass Difference: {} GeV/c^2\n\
             Amplitude Breach Points:\n",
            number,
            self.initial_energy,
            self.final_energy,
            self.energy_difference(),
            self.initial_mass,
            self.final_mass,
            self.mass_difference(),
        );
        for point in &self.breach_points {
            block.push_str(&format!(
                "  Index: {}, Amplitude: {}\n",
                point.index, point.value
            ));
        }
        block.push('\n');
        block
    }
}

/// Append-only plain-text collision log
#[derive(Debug, Clone)]
pub struct CollisionLog {
    path: PathBuf,
}

impl CollisionLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, number: u64, event: &CollisionEvent) -> ColliderResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut out = BufWriter::new(file);
        out.write_all(event.render(number).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDER
// ═══════════════════════════════════════════════════════════════════════════════

/// Writes records to the store and numbered blocks to the auxiliary log
#[derive(Debug)]
pub struct AnomalyRecorder {
    store: CollisionStore,
    log: Option<CollisionLog>,
    /// Collisions persisted by this recorder; numbers the log blocks
    collisions: u64,
}

impl AnomalyRecorder {
    pub fn new(store: CollisionStore, log: Option<CollisionLog>) -> Self {
        Self {
            store,
            log,
            collisions: 0,
        }
    }

    /// Recorder without an auxiliary log
    pub fn store_only(store_path: impl AsRef<Path>) -> Self {
        Self::new(CollisionStore::new(store_path), None)
    }

    pub fn store(&self) -> &CollisionStore {
        &self.store
    }

    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Persist one record and return its collision number.
    ///
    /// A failed store append loses the record and leaves the counter
    /// untouched. A failed log append is reported but the record stands.
    pub fn record(
        &mut self,
        record: &CollisionRecord,
        event: &CollisionEvent,
    ) -> ColliderResult<u64> {
        self.store.append(record)?;
        self.collisions += 1;
        let number = self.collisions;

        if let Some(log) = &self.log {
            if let Err(e) = log.append(number, event) {
                log::warn!(
                    "Collision #{} stored but not written to {:?}: {}",
                    number,
                    log.path(),
                    e
                );
            }
        }

        Ok(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::ParticleType;
    use tempfile::TempDir;

    fn record(a: &str, b: &str) -> CollisionRecord {
        CollisionRecord::new(a, b, ANOMALY_DETECTED, Wave::new(vec![0.0, 1.25, -0.5]))
    }

    #[test]
    fn test_header_written_once() {
        let dir = TempDir::new().unwrap();
        let store = CollisionStore::new(dir.path().join("collisions.csv"));

        store.append(&record("A", "B")).unwrap();
        store.append(&record("A", "C")).unwrap();
        store.append(&record("B", "C")).unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Particle1,Particle2,InteractionInfo,WaveData");
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines.iter().filter(|l| l.starts_with("Particle1,")).count(),
            1
        );
    }

    #[test]
    fn test_row_format() {
        let dir = TempDir::new().unwrap();
        let store = CollisionStore::new(dir.path().join("collisions.csv"));
        store.append(&record("Up Quark", "Down Quark")).unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(
            text.lines().nth(1).unwrap(),
            "Up Quark,Down Quark,Anomaly Detected,0,1.25,-0.5"
        );
    }

    #[test]
    fn test_existing_store_gets_no_second_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("collisions.csv");
        std::fs::write(&path, "Particle1,Particle2,InteractionInfo,WaveData\n").unwrap();

        CollisionStore::new(&path).append(&record("A", "B")).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("Particle1").count(), 1);
    }

    #[test]
    fn test_rejects_delimiters_in_names() {
        let dir = TempDir::new().unwrap();
        let store = CollisionStore::new(dir.path().join("collisions.csv"));
        let result = store.append(&record("Bad, Name", "B"));
        assert!(matches!(result, Err(ColliderError::InvalidRecord(_))));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_rejects_empty_wave() {
        let dir = TempDir::new().unwrap();
        let store = CollisionStore::new(dir.path().join("collisions.csv"));
        let empty = CollisionRecord::new("A", "B", ANOMALY_DETECTED, Wave::default());
        assert!(matches!(
            store.append(&empty),
            Err(ColliderError::InvalidRecord(_))
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_unopenable_store_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = CollisionStore::new(dir.path().join("missing").join("collisions.csv"));
        assert!(matches!(
            store.append(&record("A", "B")),
            Err(ColliderError::Io(_))
        ));
    }

    #[test]
    fn test_event_render() {
        let p1 = Particle::new(ParticleType::LeptonMuon, "Muon", 2.0, 0.0, 10.0, [0.0; 3], 0.4, 1.0);
        let p2 = Particle::new(ParticleType::LeptonTau, "Tau", 3.0, 0.0, 5.0, [0.0; 3], 0.7, 1.0);
        let product = Particle::new(ParticleType::Unknown, "X", 1.0, 0.0, 1.0, [0.0; 3], 1.0, 0.1);
        let event = CollisionEvent::from_pair(&p1, &p2, &product, vec![BreachPoint::new(4, 1.5)]);

        assert_eq!(event.initial_energy, 15.0);
        assert_eq!(event.final_energy, 16.0);
        assert_eq!(event.mass_difference(), 1.0);

        let block = event.render(3);
        assert!(block.starts_with("Collision #3\nInitial Energy: 15 GeV\n"));
        assert!(block.contains("Energy Difference: 1 GeV\n"));
        assert!(block.contains("Amplitude Breach Points:\n  Index: 4, Amplitude: 1.5\n"));
        assert!(block.ends_with("\n\n"));
    }

    #[test]
    fn test_recorder_numbers_collisions() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("collision_log.txt");
        let mut recorder = AnomalyRecorder::new(
            CollisionStore::new(dir.path().join("collisions.csv")),
            Some(CollisionLog::new(&log_path)),
        );
        let product = Particle::anomalous();
        let event = CollisionEvent::from_pair(&product, &product, &product, vec![]);

        assert_eq!(recorder.record(&record("A", "B"), &event).unwrap(), 1);
        assert_eq!(recorder.record(&record("A", "C"), &event).unwrap(), 2);
        assert_eq!(recorder.collisions(), 2);

        let log = std::fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("Collision #1\n"));
        assert!(log.contains("Collision #2\n"));
    }

    #[test]
    fn test_failed_log_write_keeps_record() {
        let dir = TempDir::new().unwrap();
        let store_path = dir.path().join("collisions.csv");
        let mut recorder = AnomalyRecorder::new(
            CollisionStore::new(&store_path),
            Some(CollisionLog::new(dir.path().join("missing").join("collision_log.txt"))),
        );
        let product = Particle::anomalous();
        let event = CollisionEvent::from_pair(&product, &product, &product, vec![]);

        assert_eq!(recorder.record(&record("A", "B"), &event).unwrap(), 1);
        assert_eq!(recorder.record(&record("A", "C"), &event).unwrap(), 2);
        assert_eq!(recorder.collisions(), 2);

        let text = std::fs::read_to_string(&store_path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_failed_append_keeps_counter() {
        let dir = TempDir::new().unwrap();
        let mut recorder =
            AnomalyRecorder::store_only(dir.path().join("nope").join("collisions.csv"));
        let product = Particle::anomalous();
        let event = CollisionEvent::from_pair(&product, &product, &product, vec![]);

        assert!(recorder.record(&record("A", "B"), &event).is_err());
        assert_eq!(recorder.collisions(), 0);
    }
}
