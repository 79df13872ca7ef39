//! Trailing-window summaries rebuilt from the session log store.
//!
//! Every call rescans the stored logs, so results always match what is on
//! disk. The muscle-hit accumulator is never read or written here.

use crate::adjustments::AdjustmentLog;
use crate::config::SummaryConfig;
use crate::session_log::SessionLogStore;
use crate::types::{parse_date_key, AdjustLevel, MuscleMapping, SessionLog};
use crate::Result;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Named aggregation windows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryWindow {
    Weekly,
    Monthly,
    Days(i64),
}

impl SummaryWindow {
    /// Window length in days under the given configuration
    pub fn days(&self, config: &SummaryConfig) -> i64 {
        match self {
            SummaryWindow::Weekly => config.weekly_days,
            SummaryWindow::Monthly => config.monthly_days,
            SummaryWindow::Days(n) => *n,
        }
    }
}

/// Load every stored log with `(today - date) <= window_days` calendar days
///
/// Entries whose names are not valid dates are skipped.
pub fn logs_in_window(
    window_days: i64,
    today: NaiveDate,
    store: &SessionLogStore,
) -> Result<Vec<(NaiveDate, SessionLog)>> {
    let mut logs = Vec::new();

    for key in store.list_dates()? {
        let date = match parse_date_key(&key) {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!("Skipping log entry '{}': {}", key, e);
                continue;
            }
        };

        if (today - date).num_days() > window_days {
            continue;
        }

        logs.push((date, store.load_key(&key)?));
    }

    tracing::debug!(
        "{} session logs within {} days of {}",
        logs.len(),
        window_days,
        today
    );
    Ok(logs)
}

/// Total reps per muscle over the trailing window
///
/// Each set's reps are credited in full to every muscle its exercise maps
/// to. Exercises missing from the mapping contribute nothing.
pub fn summarize(
    window_days: i64,
    today: NaiveDate,
    store: &SessionLogStore,
    mapping: &MuscleMapping,
) -> Result<BTreeMap<String, u64>> {
    let mut totals: BTreeMap<String, u64> = BTreeMap::new();

    for (_, log) in logs_in_window(window_days, today, store)? {
        for (exercise, entry) in &log.exercises {
            let muscles = mapping.muscles_for(exercise);
            if muscles.is_empty() {
                tracing::debug!("Exercise '{}' has no muscle mapping, ignoring", exercise);
                continue;
            }
            for set in &entry.sets {
                for muscle in muscles {
                    *totals.entry(muscle.clone()).or_insert(0) += u64::from(set.reps_done);
                }
            }
        }
    }

    Ok(totals)
}

/// Total volume (weight × reps) per exercise over the trailing window
///
/// Entries whose weight is not numeric (e.g. "Bodyweight") are left out.
pub fn volume_by_exercise(
    window_days: i64,
    today: NaiveDate,
    store: &SessionLogStore,
) -> Result<BTreeMap<String, f64>> {
    let mut volumes: BTreeMap<String, f64> = BTreeMap::new();

    for (_, log) in logs_in_window(window_days, today, store)? {
        for (exercise, entry) in &log.exercises {
            if let Some(weight) = entry.numeric_weight() {
                *volumes.entry(exercise.clone()).or_insert(0.0) +=
                    crate::plan::volume(weight, entry.total_reps());
            }
        }
    }

    Ok(volumes)
}

/// How often each adjustment level came up
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdjustmentCounts {
    pub reduce: usize,
    pub none: usize,
    pub boost: usize,
}

impl AdjustmentCounts {
    pub fn total(&self) -> usize {
        self.reduce + self.none + self.boost
    }
}

/// Adjustment levels of the `sessions` most recently logged days
///
/// A logged day without a readiness check counts as `none`.
pub fn adjustment_counts(
    sessions: usize,
    store: &SessionLogStore,
    adjustments: &AdjustmentLog,
) -> Result<AdjustmentCounts> {
    let keys: Vec<String> = store
        .list_dates()?
        .into_iter()
        .filter(|key| parse_date_key(key).is_ok())
        .collect();

    let mut counts = AdjustmentCounts::default();
    // YYYYMMDD keys sort chronologically
    for key in keys.iter().rev().take(sessions) {
        match adjustments.level_for_key(key) {
            AdjustLevel::Reduce => counts.reduce += 1,
            AdjustLevel::None => counts.none += 1,
            AdjustLevel::Boost => counts.boost += 1,
        }
    }
    Ok(counts)
}

/// One logged day of a single exercise
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub weight: String,
    pub total_reps: u64,
}

/// Every logged day of an exercise, oldest first
pub fn exercise_trend(exercise: &str, store: &SessionLogStore) -> Result<Vec<TrendPoint>> {
    let mut points = Vec::new();

    for key in store.list_dates()? {
        let Ok(date) = parse_date_key(&key) else {
            continue;
        };
        let log = store.load_key(&key)?;
        if let Some(entry) = log.exercises.get(exercise) {
            points.push(TrendPoint {
                date,
                weight: entry.weight.clone(),
                total_reps: entry.total_reps(),
            });
        }
    }

    tracing::debug!("{} logged days for '{}'", points.len(), exercise);
    Ok(points)
}
