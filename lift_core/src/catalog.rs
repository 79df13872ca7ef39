//! Exercise catalog: the built-in table and file-based overrides.
//!
//! A catalog is an ordered list of exercises plus the exercise → muscle
//! mapping. Order matters because the selector breaks ties by it.

use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::from_records(default_records()));

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds a fresh copy of the default catalog
pub fn build_default_catalog() -> Catalog {
    Catalog::from_records(default_records())
}

/// One exercise as written in a catalog file, muscles inline
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogRecord {
    pub name: String,
    pub split: SplitCategory,
    pub default_sets: u32,
    pub default_reps: u32,
    pub default_load: DefaultLoad,
    pub muscles: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
}

/// Catalog file format
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub exercises: Vec<CatalogRecord>,
}

fn record(
    name: &str,
    split: SplitCategory,
    (sets, reps): (u32, u32),
    load: DefaultLoad,
    muscles: &[&str],
    equipment: &[&str],
) -> CatalogRecord {
    CatalogRecord {
        name: name.into(),
        split,
        default_sets: sets,
        default_reps: reps,
        default_load: load,
        muscles: muscles.iter().map(|m| m.to_string()).collect(),
        equipment: equipment.iter().map(|e| e.to_string()).collect(),
    }
}

fn default_records() -> Vec<CatalogRecord> {
    use DefaultLoad::{Unweighted, Weight};
    use LoadUnit::{Bodyweight, Seconds};
    use SplitCategory::*;

    vec![
        // Chest & triceps
        record("Barbell Bench Press", ChestTriceps, (4, 8), Weight(95.0), &["Chest", "Triceps"], &["Barbell"]),
        record("Incline Dumbbell Press", ChestTriceps, (3, 10), Weight(30.0), &["Chest"], &["Dumbbell"]),
        record("Cable Chest Fly", ChestTriceps, (3, 12), Weight(20.0), &["Chest"], &["Cable"]),
        record("Parallel Bar Dips", ChestTriceps, (3, 10), Unweighted(Bodyweight), &["Chest", "Triceps"], &["Bodyweight"]),
        record("Triceps Rope Pushdown", ChestTriceps, (3, 12), Weight(30.0), &["Triceps"], &["Cable"]),
        record("Skull Crushers", ChestTriceps, (3, 10), Weight(40.0), &["Triceps"], &["Barbell", "Dumbbell"]),
        // Back & biceps
        record("Pull-ups", BackBiceps, (4, 8), Unweighted(Bodyweight), &["Back", "Biceps"], &["Bodyweight"]),
        record("Barbell Row", BackBiceps, (4, 8), Weight(95.0), &["Back"], &["Barbell"]),
        record("Lat Pulldown", BackBiceps, (3, 10), Weight(80.0), &["Back"], &["Cable", "Machine"]),
        record("Seated Cable Row", BackBiceps, (3, 12), Weight(70.0), &["Back"], &["Cable"]),
        record("Barbell Curl", BackBiceps, (3, 10), Weight(45.0), &["Biceps"], &["Barbell"]),
        record("Hammer Curl", BackBiceps, (3, 12), Weight(20.0), &["Biceps"], &["Dumbbell"]),
        // Shoulders & abs
        record("Overhead Press", ShouldersAbs, (4, 8), Weight(65.0), &["Shoulders"], &["Barbell", "Dumbbell"]),
        record("Dumbbell Lateral Raise", ShouldersAbs, (3, 15), Weight(12.5), &["Shoulders"], &["Dumbbell"]),
        record("Reverse Pec Deck", ShouldersAbs, (3, 15), Weight(40.0), &["Shoulders"], &["Machine"]),
        record("Plank", ShouldersAbs, (3, 60), Unweighted(Seconds), &["Abs"], &["Bodyweight"]),
        record("Hanging Leg Raise", ShouldersAbs, (3, 12), Unweighted(Bodyweight), &["Abs"], &["Bodyweight"]),
        record("Cable Crunch", ShouldersAbs, (3, 15), Weight(50.0), &["Abs"], &["Cable"]),
        // Legs
        record("Barbell Squat", Legs, (4, 8), Weight(135.0), &["Quads", "Glutes"], &["Barbell"]),
        record("Romanian Deadlift", Legs, (3, 10), Weight(115.0), &["Hamstrings", "Glutes"], &["Barbell", "Dumbbell"]),
        record("Leg Press", Legs, (3, 12), Weight(180.0), &["Quads"], &["Machine"]),
        record("Leg Extension", Legs, (3, 12), Weight(60.0), &["Quads"], &["Machine"]),
        record("Lying Leg Curl", Legs, (3, 12), Weight(50.0), &["Hamstrings"], &["Machine"]),
        record("Standing Calf Raise", Legs, (4, 15), Weight(90.0), &["Calves"], &["Machine", "Free Weight"]),
    ]
}

impl Catalog {
    /// Build a catalog from file records, keeping their order
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        let mut catalog = Catalog::default();
        for r in records {
            catalog.muscles.insert(r.name.clone(), r.muscles);
            catalog.exercises.push(Exercise {
                name: r.name,
                split: r.split,
                default_sets: r.default_sets,
                default_reps: r.default_reps,
                default_load: r.default_load,
                equipment: r.equipment,
            });
        }
        catalog
    }

    /// This catalog followed by extra records
    ///
    /// A record whose name is already in the catalog is skipped, so the
    /// earlier definition keeps its place in the tie-break order.
    pub fn with_custom(&self, records: &[CatalogRecord]) -> Catalog {
        let mut catalog = self.clone();
        for r in records {
            if catalog.find(&r.name).is_some() {
                tracing::warn!("Custom exercise '{}' shadows a catalog entry, skipping", r.name);
                continue;
            }
            catalog.muscles.insert(r.name.clone(), r.muscles.iter().cloned());
            catalog.exercises.push(Exercise {
                name: r.name.clone(),
                split: r.split,
                default_sets: r.default_sets,
                default_reps: r.default_reps,
                default_load: r.default_load,
                equipment: r.equipment.clone(),
            });
        }
        catalog
    }

    /// Only the exercises doable with the given equipment, order kept
    ///
    /// An empty equipment list means no restriction. The muscle mapping is
    /// kept whole so logged sets of filtered-out exercises still count.
    pub fn for_equipment(&self, available: &[String]) -> Catalog {
        if available.is_empty() {
            return self.clone();
        }
        Catalog {
            exercises: self
                .exercises
                .iter()
                .filter(|e| e.available_with(available))
                .cloned()
                .collect(),
            muscles: self.muscles.clone(),
        }
    }

    /// Load a catalog from a JSON or TOML file (chosen by extension)
    ///
    /// The loaded catalog must validate cleanly.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: CatalogFile = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&contents)?,
            _ => serde_json::from_str(&contents)?,
        };

        let catalog = Catalog::from_records(file.exercises);
        let errors = catalog.validate();
        if !errors.is_empty() {
            return Err(Error::CatalogValidation(errors.join("; ")));
        }

        tracing::info!(
            "Loaded catalog with {} exercises from {:?}",
            catalog.exercises.len(),
            path
        );
        Ok(catalog)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for exercise in &self.exercises {
            let name = &exercise.name;
            if name.trim().is_empty() {
                errors.push("Exercise has empty name".to_string());
                continue;
            }
            if !seen.insert(name.as_str()) {
                errors.push(format!("Duplicate exercise '{}'", name));
            }
            if exercise.default_sets == 0 {
                errors.push(format!("Exercise '{}' has zero default sets", name));
            }
            if exercise.default_reps == 0 {
                errors.push(format!("Exercise '{}' has zero default reps", name));
            }
            if let Some(w) = exercise.default_load.weight() {
                if !w.is_finite() || w < 0.0 {
                    errors.push(format!("Exercise '{}' has invalid default load {}", name, w));
                }
            }

            let muscles = self.muscles.muscles_for(name);
            if muscles.is_empty() {
                errors.push(format!("Exercise '{}' targets no muscles", name));
            }
            if muscles.iter().any(|m| m.trim().is_empty()) {
                errors.push(format!("Exercise '{}' has an empty muscle name", name));
            }
        }

        errors
    }

    /// Every distinct muscle in the mapping, in catalog order
    pub fn all_muscles(&self) -> Vec<&str> {
        let mut muscles: Vec<&str> = Vec::new();
        for exercise in &self.exercises {
            for m in self.muscles.muscles_for(&exercise.name) {
                if !muscles.contains(&m.as_str()) {
                    muscles.push(m);
                }
            }
        }
        muscles
    }
}
