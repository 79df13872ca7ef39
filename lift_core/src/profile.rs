//! User profiles and the per-profile data namespace.
//!
//! Each profile owns a directory under `<data_dir>/profiles/<name>/` holding
//! its profile document, muscle-hit accumulator, cycle tags and day logs.
//! Passwords are stored as hex SHA-256 digests; this is a convenience lock,
//! not real authentication.

use crate::catalog::CatalogRecord;
use crate::types::Goal;
use crate::{store, Catalog, Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PROFILE_FILE: &str = "profile.json";

/// Per-profile preferences
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProfileSettings {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_true")]
    pub coaching: bool,
    /// Adds a warm-up set to every planned exercise
    #[serde(default = "default_true")]
    pub warmup: bool,
    #[serde(default)]
    pub rest_interval_seconds: Option<u32>,
}

fn default_theme() -> String {
    "Light".into()
}

fn default_true() -> bool {
    true
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            coaching: true,
            warmup: true,
            rest_interval_seconds: None,
        }
    }
}

/// A stored user profile
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub age: u8,
    pub height_inches: u32,
    pub weight_lbs: u32,
    pub gender: String,
    pub goal: Goal,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub settings: ProfileSettings,
    /// Suggested working weight per exercise, advanced after each logged session
    #[serde(default)]
    pub exercise_weights: BTreeMap<String, f64>,
    /// The profile's own exercises, selectable alongside the catalog
    #[serde(default)]
    pub custom_exercises: Vec<CatalogRecord>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Add a custom exercise
    ///
    /// The record must validate on its own and its name must not clash with
    /// an exercise already in `catalog`.
    pub fn add_custom_exercise(&mut self, record: CatalogRecord, catalog: &Catalog) -> Result<()> {
        if catalog.find(&record.name).is_some()
            || self.custom_exercises.iter().any(|e| e.name == record.name)
        {
            return Err(Error::Profile(format!(
                "Exercise '{}' already exists",
                record.name
            )));
        }

        let errors = Catalog::from_records(vec![record.clone()]).validate();
        if !errors.is_empty() {
            return Err(Error::CatalogValidation(errors.join("; ")));
        }

        tracing::info!("Profile '{}' added exercise '{}'", self.name, record.name);
        self.custom_exercises.push(record);
        Ok(())
    }

    /// Remove a custom exercise by name; false if there was none
    pub fn remove_custom_exercise(&mut self, name: &str) -> bool {
        let before = self.custom_exercises.len();
        self.custom_exercises.retain(|e| e.name != name);
        before != self.custom_exercises.len()
    }

    /// `base` plus this profile's custom exercises (all equipment)
    pub fn catalog(&self, base: &Catalog) -> Catalog {
        base.with_custom(&self.custom_exercises)
    }

    /// The pool this profile trains from: custom exercises merged, then
    /// narrowed to the profile's equipment
    pub fn training_catalog(&self, base: &Catalog) -> Catalog {
        self.catalog(base).for_equipment(&self.equipment)
    }
}

/// Input for creating a profile
#[derive(Clone, Debug)]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: u8,
    /// Feet and inches, e.g. `5'10`
    pub height: String,
    pub weight_lbs: u32,
    pub gender: String,
    pub goal: Goal,
    pub equipment: Vec<String>,
}

/// Hex SHA-256 digest of a password
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Parse a `feet'inches` height (straight or curly apostrophe) into inches
pub fn parse_height(height: &str) -> Result<u32> {
    let invalid = || Error::Profile(format!("Invalid height format '{}', expected e.g. 5'10", height));

    let (feet, inches) = height
        .trim()
        .split_once(['\'', '’'])
        .ok_or_else(invalid)?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(feet) || !all_digits(inches) {
        return Err(invalid());
    }

    let feet: u32 = feet.parse().map_err(|_| invalid())?;
    let inches: u32 = inches.parse().map_err(|_| invalid())?;
    feet.checked_mul(12)
        .and_then(|total| total.checked_add(inches))
        .ok_or_else(invalid)
}

/// Profile names become directory names, so keep them to a safe alphabet
fn validate_name(name: &str) -> Result<()> {
    let ok = !name.is_empty()
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if ok {
        Ok(())
    } else {
        Err(Error::Profile(format!(
            "Invalid profile name '{}': use letters, digits, '_', '-' or '.'",
            name
        )))
    }
}

/// Locations of a profile's documents
#[derive(Clone, Debug)]
pub struct ProfilePaths {
    pub dir: PathBuf,
    pub profile: PathBuf,
    pub accumulator: PathBuf,
    pub cycle_tags: PathBuf,
    pub adjustments: PathBuf,
    pub logs: PathBuf,
}

/// Directory of profiles under `<data_dir>/profiles`
#[derive(Clone, Debug)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            root: data_dir.join("profiles"),
        }
    }

    /// Paths for a profile's namespace (the profile document need not exist)
    pub fn paths(&self, name: &str) -> Result<ProfilePaths> {
        validate_name(name)?;
        let dir = self.root.join(name);
        Ok(ProfilePaths {
            profile: dir.join(PROFILE_FILE),
            accumulator: dir.join("muscle_stats.json"),
            cycle_tags: dir.join("cycle_tags.json"),
            adjustments: dir.join("adjustments.json"),
            logs: dir.join("logs"),
            dir,
        })
    }

    /// Names of profiles that have a profile document, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        if !self.root.exists() {
            return Ok(names);
        }

        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().join(PROFILE_FILE).is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    pub fn load(&self, name: &str) -> Result<Option<Profile>> {
        store::load_optional(&self.paths(name)?.profile)
    }

    pub fn save(&self, profile: &Profile) -> Result<()> {
        store::save(&self.paths(&profile.name)?.profile, profile)
    }

    /// Create and persist a new profile
    pub fn create(&self, new: NewProfile) -> Result<Profile> {
        validate_name(&new.name)?;
        if self.paths(&new.name)?.profile.exists() {
            return Err(Error::Profile(format!("Profile '{}' already exists", new.name)));
        }
        if !(10..=100).contains(&new.age) {
            return Err(Error::Profile(format!("Age {} out of range 10-100", new.age)));
        }
        if !(50..=500).contains(&new.weight_lbs) {
            return Err(Error::Profile(format!(
                "Weight {} out of range 50-500 lbs",
                new.weight_lbs
            )));
        }

        let profile = Profile {
            id: Uuid::new_v4(),
            height_inches: parse_height(&new.height)?,
            password_hash: hash_password(&new.password),
            name: new.name,
            email: new.email,
            age: new.age,
            weight_lbs: new.weight_lbs,
            gender: new.gender,
            goal: new.goal,
            equipment: new.equipment,
            settings: ProfileSettings::default(),
            exercise_weights: BTreeMap::new(),
            custom_exercises: Vec::new(),
            created_at: Utc::now(),
        };

        self.save(&profile)?;
        tracing::info!("Created profile '{}'", profile.name);
        Ok(profile)
    }

    /// Load a profile if the password matches
    pub fn login(&self, name: &str, password: &str) -> Result<Profile> {
        let profile = self
            .load(name)?
            .ok_or_else(|| Error::Profile(format!("No profile named '{}'", name)))?;

        if profile.password_hash != hash_password(password) {
            tracing::warn!("Failed login for profile '{}'", name);
            return Err(Error::Profile("Invalid password".into()));
        }

        Ok(profile)
    }
}
