//! Training-cycle annotations: a free-form label per date.
//!
//! Purely informational; aggregation never reads these.

use crate::types::date_key;
use crate::{store, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Date key → label
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CycleTags {
    tags: BTreeMap<String, String>,
}

impl CycleTags {
    pub fn load(path: &Path) -> Result<Self> {
        store::load_or_default(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        store::save(path, self)
    }

    /// Set (or replace) the label for a date
    pub fn tag(&mut self, date: NaiveDate, label: impl Into<String>) {
        self.tags.insert(date_key(date), label.into());
    }

    pub fn get(&self, date: NaiveDate) -> Option<&str> {
        self.tags.get(&date_key(date)).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(d, l)| (d.as_str(), l.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_and_persist() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("cycle_tags.json");
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();

        let mut tags = CycleTags::default();
        tags.tag(date, "Deload week");
        tags.save(&path).unwrap();

        let loaded = CycleTags::load(&path).unwrap();
        assert_eq!(loaded.get(date), Some("Deload week"));

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "20240205": "Deload week" }));
    }

    #[test]
    fn test_retag_replaces_label() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let mut tags = CycleTags::default();
        tags.tag(date, "Week 1");
        tags.tag(date, "Week 2");
        assert_eq!(tags.iter().collect::<Vec<_>>(), [("20240205", "Week 2")]);
    }
}
