//! Per-day session log store.
//!
//! One JSON document per calendar day, named `YYYYMMDD.json`. Saving a date
//! twice replaces the earlier content; nothing is ever merged or deleted.
//!
//! In-progress workouts live in a [`SessionDraft`], which has no persistence
//! path of its own. Only a finished draft becomes a [`SessionLog`] that can be
//! saved, so an abandoned session leaves nothing on disk.

use crate::types::{date_key, ExerciseLog, SessionLog, SetRecord};
use crate::{store, Result};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const LOG_EXTENSION: &str = "json";

/// Directory-backed store of day logs
#[derive(Clone, Debug)]
pub struct SessionLogStore {
    dir: PathBuf,
}

impl SessionLogStore {
    /// Create a store rooted at `dir` (created lazily on first save)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for_key(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, LOG_EXTENSION))
    }

    /// Write the full log for a date, replacing any earlier one
    pub fn save(&self, date: NaiveDate, log: &SessionLog) -> Result<()> {
        let key = date_key(date);
        store::save(&self.path_for_key(&key), log)?;
        tracing::info!(
            "Saved session log {} ({} exercises)",
            key,
            log.exercises.len()
        );
        Ok(())
    }

    /// Load a date's log; empty if none was saved or it cannot be parsed
    pub fn load(&self, date: NaiveDate) -> Result<SessionLog> {
        self.load_key(&date_key(date))
    }

    /// Load by raw storage key
    pub fn load_key(&self, key: &str) -> Result<SessionLog> {
        store::load_or_default(&self.path_for_key(key))
    }

    /// Stems of every `.json` file in the store
    ///
    /// Names are returned as found; callers decide what to do with ones that
    /// are not valid dates.
    pub fn list_dates(&self) -> Result<BTreeSet<String>> {
        let mut keys = BTreeSet::new();
        if !self.dir.exists() {
            return Ok(keys);
        }

        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(LOG_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.insert(stem.to_string());
            }
        }

        tracing::debug!("Found {} session logs in {:?}", keys.len(), self.dir);
        Ok(keys)
    }
}

/// An in-progress workout for one day
#[derive(Clone, Debug)]
pub struct SessionDraft {
    date: NaiveDate,
    log: SessionLog,
}

impl SessionDraft {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            log: SessionLog::default(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Record the weight actually used for an exercise
    pub fn set_weight(&mut self, exercise: &str, weight: impl Into<String>) {
        self.entry(exercise).weight = weight.into();
    }

    /// Append a set; indices run 1.. per exercise in recording order
    pub fn record_set(&mut self, exercise: &str, reps_done: u32) {
        let entry = self.entry(exercise);
        let set_index = entry.sets.len() as u32 + 1;
        entry.sets.push(SetRecord {
            set_index,
            reps_done,
        });
    }

    fn entry(&mut self, exercise: &str) -> &mut ExerciseLog {
        self.log.exercises.entry(exercise.to_string()).or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Finalize the draft into a storable log
    pub fn finish(self) -> (NaiveDate, SessionLog) {
        (self.date, self.log)
    }
}
