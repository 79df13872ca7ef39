//! Persistent muscle-hit accumulator.
//!
//! A running total of how often each muscle has been programmed. Scores only
//! grow through selections until an explicit reset starts a new cycle; there
//! is no decay or windowing, and the totals are never reconciled with the
//! log-based aggregates.

use crate::{store, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Muscle → cumulative exposure score
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MuscleHitAccumulator {
    hits: BTreeMap<String, u64>,
}

impl MuscleHitAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score for a muscle (0 if never hit)
    pub fn get(&self, muscle: &str) -> u64 {
        self.hits.get(muscle).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, muscle: &str, by: u64) {
        let score = self.hits.entry(muscle.to_string()).or_insert(0);
        *score = score.saturating_add(by);
    }

    /// Zero every entry, keeping the muscles that were already tracked
    pub fn reset(&mut self) {
        for score in self.hits.values_mut() {
            *score = 0;
        }
        tracing::info!("Reset muscle hit accumulator ({} muscles)", self.hits.len());
    }

    /// Tracked muscles and scores, in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.hits.iter().map(|(m, s)| (m.as_str(), *s))
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Load the accumulator, starting empty if the file is absent or corrupt
    pub fn load(path: &Path) -> Result<Self> {
        store::load_or_default(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        store::save(path, self)
    }

    /// Load, modify and save back
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut MuscleHitAccumulator) -> Result<()>,
    {
        let mut acc = Self::load(path)?;
        f(&mut acc)?;
        acc.save(path)?;
        Ok(acc)
    }
}
