//! Core domain types for liftlog.
//!
//! This module defines the fundamental types used throughout the system:
//! - Split categories and exercises
//! - The exercise → muscle mapping
//! - Per-day session logs
//! - Training goals and readiness adjustments

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

// ============================================================================
// Exercise Types
// ============================================================================

/// A named grouping of exercises trained together in one session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SplitCategory {
    ChestTriceps,
    BackBiceps,
    ShouldersAbs,
    Legs,
}

impl SplitCategory {
    /// All split categories in rotation order
    pub fn all() -> &'static [SplitCategory] {
        &[
            SplitCategory::ChestTriceps,
            SplitCategory::BackBiceps,
            SplitCategory::ShouldersAbs,
            SplitCategory::Legs,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SplitCategory::ChestTriceps => "chest_triceps",
            SplitCategory::BackBiceps => "back_biceps",
            SplitCategory::ShouldersAbs => "shoulders_abs",
            SplitCategory::Legs => "legs",
        }
    }
}

impl fmt::Display for SplitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitCategory {
    type Err = Error;

    /// Accepts the snake_case name, with `-` or spaces in place of `_`
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        SplitCategory::all()
            .iter()
            .copied()
            .find(|split| split.as_str() == normalized)
            .ok_or_else(|| Error::Other(format!("Unknown split category: {}", s)))
    }
}

/// Unit for exercises without a prescribed weight
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoadUnit {
    Bodyweight,
    Seconds,
}

/// Default load for an exercise: a weight in lbs, or a unit marker
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DefaultLoad {
    Weight(f64),
    Unweighted(LoadUnit),
}

impl DefaultLoad {
    /// The numeric weight, if this load has one
    pub fn weight(&self) -> Option<f64> {
        match self {
            DefaultLoad::Weight(w) => Some(*w),
            DefaultLoad::Unweighted(_) => None,
        }
    }
}

impl FromStr for DefaultLoad {
    type Err = Error;

    /// A number of lbs, or `Bodyweight` / `Seconds`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("bodyweight") {
            return Ok(DefaultLoad::Unweighted(LoadUnit::Bodyweight));
        }
        if s.eq_ignore_ascii_case("seconds") {
            return Ok(DefaultLoad::Unweighted(LoadUnit::Seconds));
        }
        match s.parse::<f64>() {
            Ok(w) if w.is_finite() && w >= 0.0 => Ok(DefaultLoad::Weight(w)),
            _ => Err(Error::InvalidEntry(format!(
                "Invalid load '{}': expected lbs, Bodyweight or Seconds",
                s
            ))),
        }
    }
}

impl fmt::Display for DefaultLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultLoad::Weight(w) => write!(f, "{} lbs", w),
            DefaultLoad::Unweighted(LoadUnit::Bodyweight) => f.write_str("Bodyweight"),
            DefaultLoad::Unweighted(LoadUnit::Seconds) => f.write_str("Seconds"),
        }
    }
}

/// A catalog exercise (e.g., "Barbell Squat")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub split: SplitCategory,
    pub default_sets: u32,
    pub default_reps: u32,
    pub default_load: DefaultLoad,
    /// Equipment the exercise can be done with; empty means none needed
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl Exercise {
    /// Whether any of the listed equipment is available
    ///
    /// Exercises listing no equipment are always available.
    pub fn available_with(&self, available: &[String]) -> bool {
        self.equipment.is_empty()
            || self
                .equipment
                .iter()
                .any(|e| available.iter().any(|a| a.eq_ignore_ascii_case(e)))
    }
}

/// Exercise name → ordered set of target muscles
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MuscleMapping {
    muscles: HashMap<String, Vec<String>>,
}

impl MuscleMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an exercise to its muscles, dropping repeated muscle names
    pub fn insert<I, S>(&mut self, exercise: impl Into<String>, muscles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for muscle in muscles {
            let muscle = muscle.into();
            if !ordered.contains(&muscle) {
                ordered.push(muscle);
            }
        }
        self.muscles.insert(exercise.into(), ordered);
    }

    /// Muscles targeted by an exercise; empty for unmapped exercises
    pub fn muscles_for(&self, exercise: &str) -> &[String] {
        self.muscles
            .get(exercise)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, exercise: &str) -> bool {
        self.muscles.contains_key(exercise)
    }

    pub fn len(&self) -> usize {
        self.muscles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.muscles.is_empty()
    }
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The complete exercise catalog plus its muscle mapping
///
/// Exercise order is significant: the selector breaks load ties by it.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub muscles: MuscleMapping,
}

impl Catalog {
    /// Exercises belonging to a split, in catalog order
    pub fn pool(&self, split: SplitCategory) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter().filter(move |e| e.split == split)
    }

    pub fn find(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }
}

// ============================================================================
// Session Log Types
// ============================================================================

/// One performed set
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetRecord {
    #[serde(rename = "set")]
    pub set_index: u32,
    #[serde(rename = "reps")]
    pub reps_done: u32,
}

/// What was actually done for one exercise on one day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ExerciseLog {
    pub weight: String,
    pub sets: Vec<SetRecord>,
}

impl ExerciseLog {
    pub fn total_reps(&self) -> u64 {
        self.sets.iter().map(|s| u64::from(s.reps_done)).sum()
    }

    /// Numeric weight, if the recorded weight is a finite non-negative number
    pub fn numeric_weight(&self) -> Option<f64> {
        parse_weight(&self.weight)
    }
}

/// A recorded weight as lbs; `None` for text such as "Bodyweight" and for
/// NaN, infinite or negative numbers
pub fn parse_weight(weight: &str) -> Option<f64> {
    weight
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w >= 0.0)
}

/// A finished day's session: exercise name → performance
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct SessionLog {
    pub exercises: BTreeMap<String, ExerciseLog>,
}

impl SessionLog {
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

// ============================================================================
// Date Keys
// ============================================================================

const DATE_KEY_FORMAT: &str = "%Y%m%d";

/// Format a date as its storage key (`YYYYMMDD`)
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYYMMDD` storage key
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    if key.len() != 8 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidDate(key.to_string()));
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).map_err(|_| Error::InvalidDate(key.to_string()))
}

// ============================================================================
// Training Goal and Readiness
// ============================================================================

/// Training goal chosen on the profile
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
    Recomposition,
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Goal::Strength),
            "hypertrophy" => Ok(Goal::Hypertrophy),
            "endurance" => Ok(Goal::Endurance),
            "recomposition" | "recomp" => Ok(Goal::Recomposition),
            other => Err(Error::Profile(format!("Unknown goal: {}", other))),
        }
    }
}

/// Daily intensity adjustment derived from a readiness check
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdjustLevel {
    Reduce,
    None,
    Boost,
}

/// Self-reported readiness, each on a 1–10 scale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Readiness {
    pub sleep: u8,
    pub stress: u8,
    pub soreness: u8,
    pub rpe: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_parse_variants() {
        assert_eq!("legs".parse::<SplitCategory>().unwrap(), SplitCategory::Legs);
        assert_eq!(
            "Chest-Triceps".parse::<SplitCategory>().unwrap(),
            SplitCategory::ChestTriceps
        );
        assert_eq!(
            "shoulders abs".parse::<SplitCategory>().unwrap(),
            SplitCategory::ShouldersAbs
        );
        assert!("arms".parse::<SplitCategory>().is_err());
    }

    #[test]
    fn test_default_load_serde_forms() {
        let loads: Vec<DefaultLoad> =
            serde_json::from_str(r#"[135.0, "Bodyweight", "Seconds", 20]"#).unwrap();
        assert_eq!(loads[0], DefaultLoad::Weight(135.0));
        assert_eq!(loads[1], DefaultLoad::Unweighted(LoadUnit::Bodyweight));
        assert_eq!(loads[2], DefaultLoad::Unweighted(LoadUnit::Seconds));
        assert_eq!(loads[3].weight(), Some(20.0));
    }

    #[test]
    fn test_session_log_document_shape() {
        let json = r#"{"Barbell Squat":{"weight":"135","sets":[{"set":1,"reps":10},{"set":2,"reps":8}]}}"#;
        let log: SessionLog = serde_json::from_str(json).unwrap();
        let squat = &log.exercises["Barbell Squat"];
        assert_eq!(squat.total_reps(), 18);
        assert_eq!(squat.numeric_weight(), Some(135.0));
        assert_eq!(squat.sets[1].set_index, 2);

        let back = serde_json::to_string(&log).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_numeric_weight_rejects_nan_inf_and_negative() {
        let entry = |weight: &str| ExerciseLog {
            weight: weight.into(),
            sets: vec![],
        };
        assert_eq!(entry(" 135.5 ").numeric_weight(), Some(135.5));
        assert_eq!(entry("NaN").numeric_weight(), None);
        assert_eq!(entry("inf").numeric_weight(), None);
        assert_eq!(entry("-20").numeric_weight(), None);
        assert_eq!(entry("Bodyweight").numeric_weight(), None);
    }

    #[test]
    fn test_default_load_from_str() {
        assert_eq!("95".parse::<DefaultLoad>().unwrap(), DefaultLoad::Weight(95.0));
        assert_eq!(
            "bodyweight".parse::<DefaultLoad>().unwrap(),
            DefaultLoad::Unweighted(LoadUnit::Bodyweight)
        );
        assert!("-5".parse::<DefaultLoad>().is_err());
        assert!("heavy".parse::<DefaultLoad>().is_err());
    }

    #[test]
    fn test_equipment_availability() {
        let exercise = |equipment: &[&str]| Exercise {
            name: "Row".into(),
            split: SplitCategory::BackBiceps,
            default_sets: 3,
            default_reps: 10,
            default_load: DefaultLoad::Weight(50.0),
            equipment: equipment.iter().map(|e| e.to_string()).collect(),
        };
        let dumbbell_only = vec!["Dumbbell".to_string()];

        assert!(!exercise(&["Barbell"]).available_with(&dumbbell_only));
        assert!(exercise(&["Barbell", "dumbbell"]).available_with(&dumbbell_only));
        assert!(exercise(&[]).available_with(&dumbbell_only));
    }

    #[test]
    fn test_muscle_mapping_dedupes_and_defaults() {
        let mut mapping = MuscleMapping::new();
        mapping.insert("Dips", ["Chest", "Triceps", "Chest"]);
        assert_eq!(mapping.muscles_for("Dips"), ["Chest", "Triceps"]);
        assert!(mapping.muscles_for("Unknown").is_empty());
    }

    #[test]
    fn test_date_keys() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(date_key(date), "20240309");
        assert_eq!(parse_date_key("20240309").unwrap(), date);
        assert!(parse_date_key("2024-03-09").is_err());
        assert!(parse_date_key("20241345").is_err());
        assert!(parse_date_key("notes").is_err());
    }
}
