//! Interaction Registry
//!
//! Insert-only set of pair identifiers already evaluated. It grows for
//! the lifetime of a driver and never shrinks, so a pair is evaluated at
//! most once no matter how many sweeps the driver runs.

use crate::particles::Particle;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Separator placed between the two names of a pair id
pub const PAIR_SEPARATOR: char = '-';

/// How a pair of names is turned into a registry key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PairIdentity {
    /// Names sorted before joining: `{a, b}` and `{b, a}` share one id
    #[default]
    Sorted,
    /// Names joined in encounter order (legacy): `a-b` differs from `b-a`
    EncounterOrder,
}

impl PairIdentity {
    /// Build the canonical id for a pair of names
    pub fn canonical_id(&self, name1: &str, name2: &str) -> String {
        let (first, second) = match self {
            Self::Sorted if name2 < name1 => (name2, name1),
            _ => (name1, name2),
        };
        format!("{}{}{}", first, PAIR_SEPARATOR, second)
    }
}

/// Set of pair ids that have already been evaluated
#[derive(Debug, Clone, Default)]
pub struct InteractionRegistry {
    identity: PairIdentity,
    seen: HashSet<String>,
}

impl InteractionRegistry {
    pub fn new(identity: PairIdentity) -> Self {
        Self {
            identity,
            seen: HashSet::new(),
        }
    }

    pub fn identity(&self) -> PairIdentity {
        self.identity
    }

    /// Canonical id of a particle pair under this registry's policy
    pub fn canonical_id(&self, p1: &Particle, p2: &Particle) -> String {
        self.identity.canonical_id(p1.name(), p2.name())
    }

    pub fn has_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Mark an id as seen. Returns `true` if it was not seen before.
    pub fn mark_seen(&mut self, id: impl Into<String>) -> bool {
        self.seen.insert(id.into())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
