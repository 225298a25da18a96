//! Collision Store Reader
//!
//! Consumer side of the store written by
//! [`CollisionStore`](crate::recorder::CollisionStore). The first line is
//! skipped as the header; each remaining line is split into
//! `particle1, particle2, interactionInfo, waveData...`.
//!
//! Short lines and lines that are not valid UTF-8 are dropped without
//! complaint; only I/O failures abort the load. Wave fields may hold
//! several whitespace-separated values; parsing stops at the first token
//! that is not a number, keeping what was read so far.

use crate::recorder::CollisionRecord;
use crate::wave::Wave;
use crate::ColliderResult;
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

/// Load every well-formed record from a store file
pub fn load_records(path: impl AsRef<Path>) -> ColliderResult<Vec<CollisionRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.byte_records() {
        let row = row?;
        let Some(row) = decode_row(row) else {
            continue;
        };
        if let Some(record) = parse_row(&row) {
            records.push(record);
        }
    }

    log::debug!("Loaded {} collision records from {:?}", records.len(), path);
    Ok(records)
}

fn decode_row(row: ByteRecord) -> Option<StringRecord> {
    let line = row.position().map(|p| p.line());
    match StringRecord::from_byte_record(row) {
        Ok(row) => Some(row),
        Err(e) => {
            log::debug!("Skipping store line {:?}: {}", line, e.utf8_error());
            None
        }
    }
}

fn parse_row(row: &StringRecord) -> Option<CollisionRecord> {
    if row.len() < 4 {
        return None;
    }
    // "a,b,c," carries no wave text at all
    if row.len() == 4 && row[3].is_empty() {
        return None;
    }

    Some(CollisionRecord::new(
        &row[0],
        &row[1],
        &row[2],
        parse_wave(row.iter().skip(3)),
    ))
}

fn parse_wave<'a>(fields: impl Iterator<Item = &'a str>) -> Wave {
    let mut samples = Vec::new();
    for field in fields {
        let mut tokens = field.split_whitespace().peekable();
        if tokens.peek().is_none() {
            break;
        }
        for token in tokens {
            match token.parse::<f32>() {
                Ok(v) => samples.push(v),
                Err(_) => return Wave::new(samples),
            }
        }
    }
    Wave::new(samples)
}

// ═══════════════════════════════════════════════════════════════════════════════
// BROWSER
// ═══════════════════════════════════════════════════════════════════════════════

/// Clamped cursor over loaded records
#[derive(Debug, Clone, Default)]
pub struct AnomalyBrowser {
    records: Vec<CollisionRecord>,
    current: usize,
}

impl AnomalyBrowser {
    pub fn new(records: Vec<CollisionRecord>) -> Self {
        Self {
            records,
            current: 0,
        }
    }

    pub fn open(path: impl AsRef<Path>) -> ColliderResult<Self> {
        Ok(Self::new(load_records(path)?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Zero-based cursor position
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&CollisionRecord> {
        self.records.get(self.current)
    }

    pub fn records(&self) -> &[CollisionRecord] {
        &self.records
    }

    /// Advance; stays on the last record
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&CollisionRecord> {
        if self.current + 1 < self.records.len() {
            self.current += 1;
        }
        self.current()
    }

    /// Step back; stays on the first record
    pub fn previous(&mut self) -> Option<&CollisionRecord> {
        self.current = self.current.saturating_sub(1);
        self.current()
    }

    /// Jump to `index`, clamped to the last record
    pub fn seek(&mut self, index: usize) -> Option<&CollisionRecord> {
        self.current = index.min(self.records.len().saturating_sub(1));
        self.current()
    }

    pub fn summary(&self) -> Option<String> {
        self.current().map(|record| {
            format!(
                "Anomaly {} of {}\nParticles: {} - {}\nInteraction: {}",
                self.current + 1,
                self.records.len(),
                record.particle1,
                record.particle2,
                record.interaction_info
            )
        })
    }
}
