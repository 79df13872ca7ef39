//! Per-date readiness adjustments.
//!
//! The `readiness` check records its verdict for the day here, next to the
//! day logs rather than inside them, so the log document keeps its shape.

use crate::types::{date_key, AdjustLevel};
use crate::{store, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Date key → adjustment level
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjustmentLog {
    levels: BTreeMap<String, AdjustLevel>,
}

impl AdjustmentLog {
    pub fn load(path: &Path) -> Result<Self> {
        store::load_or_default(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        store::save(path, self)
    }

    /// Record (or replace) the level for a date
    pub fn record(&mut self, date: NaiveDate, level: AdjustLevel) {
        self.levels.insert(date_key(date), level);
    }

    /// Level for a date; days without a readiness check count as `None`
    pub fn level_for_key(&self, key: &str) -> AdjustLevel {
        self.levels.get(key).copied().unwrap_or(AdjustLevel::None)
    }

    pub fn level(&self, date: NaiveDate) -> AdjustLevel {
        self.level_for_key(&date_key(date))
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
