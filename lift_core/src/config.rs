//! Configuration file support for liftlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftlog/config.toml`.

use crate::catalog::get_default_catalog;
use crate::{Catalog, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub summary: SummaryConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub training: TrainingConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_profile")]
    pub default_profile: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_profile: default_profile(),
        }
    }
}

/// Daily selection parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default = "default_exercises_per_day")]
    pub exercises_per_day: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            exercises_per_day: default_exercises_per_day(),
        }
    }
}

/// Aggregation window lengths, in days
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_weekly_days")]
    pub weekly_days: i64,

    #[serde(default = "default_monthly_days")]
    pub monthly_days: i64,

    /// Logged sessions counted by the adjustment summary
    #[serde(default = "default_adjustment_sessions")]
    pub adjustment_sessions: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            weekly_days: default_weekly_days(),
            monthly_days: default_monthly_days(),
            adjustment_sessions: default_adjustment_sessions(),
        }
    }
}

/// Optional catalog override
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON or TOML catalog file replacing the built-in table
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Training session defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingConfig {
    #[serde(default = "default_rest_interval")]
    pub rest_interval_seconds: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            rest_interval_seconds: default_rest_interval(),
        }
    }
}

// Default value functions
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| home_dir().join(".local/share"));
    base.join("liftlog")
}

fn default_profile() -> String {
    "default".into()
}

fn default_exercises_per_day() -> usize {
    6
}

fn default_weekly_days() -> i64 {
    7
}

fn default_monthly_days() -> i64 {
    30
}

fn default_adjustment_sessions() -> usize {
    7
}

fn default_rest_interval() -> u32 {
    60
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Reject values the rest of the system cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.summary.weekly_days < 0 || self.summary.monthly_days < 0 {
            return Err(Error::Config("summary windows must be non-negative".into()));
        }
        if self.data.default_profile.trim().is_empty() {
            return Err(Error::Config("default_profile must not be empty".into()));
        }
        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| home_dir().join(".config"));
        base.join("liftlog").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Catalog::load_from(path),
            None => Ok(get_default_catalog().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.selection.exercises_per_day, 6);
        assert_eq!(config.summary.weekly_days, 7);
        assert_eq!(config.summary.monthly_days, 30);
        assert_eq!(config.summary.adjustment_sessions, 7);
        assert_eq!(config.training.rest_interval_seconds, 60);
        assert_eq!(config.data.default_profile, "default");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.selection.exercises_per_day = 4;
        config.save_to(&path).unwrap();

        let parsed = Config::load_from(&path).unwrap();
        assert_eq!(parsed.selection.exercises_per_day, 4);
        assert_eq!(parsed.data.data_dir, config.data.data_dir);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[summary]
monthly_days = 28
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.summary.monthly_days, 28);
        assert_eq!(config.summary.weekly_days, 7); // default
        assert_eq!(config.selection.exercises_per_day, 6); // default
    }

    #[test]
    fn test_negative_window_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[summary]\nweekly_days = -1\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_catalog_defaults_to_builtin() {
        let config = Config::default();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.exercises, build_default_catalog().exercises);
    }
}
