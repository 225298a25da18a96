//! Sweep Configuration
//!
//! `ColliderConfig` is a plain serde struct. Binaries load it from JSON
//! and then apply command-line overrides on top.
//!
//! ```json
//! {
//!   "store_path": "collisions.csv",
//!   "log_path": "collision_log.txt",
//!   "pair_identity": "Sorted",
//!   "parallel": false,
//!   "interaction_info": "Anomaly Detected",
//!   "spawn_anomalous": true
//! }
//! ```

use crate::error::ColliderError;
use crate::recorder::ANOMALY_DETECTED;
use crate::registry::PairIdentity;
use crate::ColliderResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for one collider sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderConfig {
    /// Collision store (CSV)
    pub store_path: PathBuf,
    /// Auxiliary plain-text collision log; `None` disables it
    pub log_path: Option<PathBuf>,
    /// How pair ids are built for deduplication
    pub pair_identity: PairIdentity,
    /// Evaluate pairs on the rayon thread pool
    pub parallel: bool,
    /// Descriptor written for every breaching pair
    pub interaction_info: String,
    /// Append a synthesized anomalous particle per breaching pair
    pub spawn_anomalous: bool,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("collisions.csv"),
            log_path: Some(PathBuf::from("collision_log.txt")),
            pair_identity: PairIdentity::Sorted,
            parallel: false,
            interaction_info: ANOMALY_DETECTED.to_string(),
            spawn_anomalous: true,
        }
    }
}

impl ColliderConfig {
    /// Store-only configuration rooted at `store_path`
    pub fn with_store(store_path: impl AsRef<Path>) -> Self {
        Self {
            store_path: store_path.as_ref().to_path_buf(),
            log_path: None,
            ..Self::default()
        }
    }

    /// Pair ids in encounter order, matching stores written before sorting
    pub fn legacy() -> Self {
        Self {
            pair_identity: PairIdentity::EncounterOrder,
            ..Self::default()
        }
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ColliderResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: Self =
            serde_json::from_str(&text).map_err(|e| ColliderError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_file(&self, path: impl AsRef<Path>) -> ColliderResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColliderError::Serialization(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> ColliderResult<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(ColliderError::InvalidParameter(
                "store_path must not be empty".into(),
            ));
        }
        if self.log_path.as_ref().is_some_and(|p| p == &self.store_path) {
            return Err(ColliderError::InvalidParameter(
                "log_path must differ from store_path".into(),
            ));
        }
        if self.interaction_info.is_empty() {
            return Err(ColliderError::InvalidParameter(
                "interaction_info must not be empty".into(),
            ));
        }
        if self.interaction_info.contains([',', '\n', '\r']) {
            return Err(ColliderError::InvalidParameter(format!(
                "interaction_info {:?} must not contain commas or line breaks",
                self.interaction_info
            )));
        }
        Ok(())
    }
}
