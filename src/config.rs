//! Configuration System
//!
//! Handles loading analytics configuration from files and environment
//! variables. Supports TOML config files and environment variable
//! overrides. Every knob has a compiled-in default, so hosts that never
//! touch configuration get the product's stock behavior.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::correlation::CorrelationConfig;
use crate::insights::AchievementConfig;
use crate::streak::StreakConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub correlation: CorrelationConfig,

    #[serde(default)]
    pub streak: StreakConfig,

    #[serde(default)]
    pub achievements: AchievementConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("cadence").join("config.toml")),
            Some(PathBuf::from("/etc/cadence/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("CADENCE_MIN_ENTRIES") {
            if let Ok(parsed) = value.parse() {
                self.correlation.minimum_entries = parsed;
            }
        }
        if let Ok(value) = std::env::var("CADENCE_WINDOW_DAYS") {
            if let Ok(parsed) = value.parse() {
                self.correlation.window_days = parsed;
            }
        }
        if let Ok(value) = std::env::var("CADENCE_TIME_RANGE_DAYS") {
            if let Ok(parsed) = value.parse() {
                self.streak.time_range_days = parsed;
            }
        }
        if let Ok(value) = std::env::var("CADENCE_HABIT_WEEKS") {
            if let Ok(parsed) = value.parse() {
                self.achievements.habit_weeks = parsed;
            }
        }
        if let Ok(value) = std::env::var("CADENCE_LIFESTYLE_WEEKS") {
            if let Ok(parsed) = value.parse() {
                self.achievements.lifestyle_weeks = parsed;
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Cadence Configuration
#
# Environment variables override these settings:
# - CADENCE_MIN_ENTRIES
# - CADENCE_WINDOW_DAYS
# - CADENCE_TIME_RANGE_DAYS
# - CADENCE_HABIT_WEEKS
# - CADENCE_LIFESTYLE_WEEKS

[correlation]
# Ratings required per metric before correlations are surfaced
minimum_entries = 7

# Lookback window (days) in which an activity occurrence counts as
# preceding a rating
window_days = 1

[streak]
# How far back (days) the weekly streak walk may start
time_range_days = 60

[achievements]
# Streak score at which a plan counts as a habit
habit_weeks = 4

# Streak score at which a plan counts as a lifestyle
lifestyle_weeks = 12
"#
    .to_string()
}
