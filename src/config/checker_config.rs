//! Checker configuration
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. User config (`~/.config/phishcheck/config.toml`)
//! 3. Project config (`./phishcheck.toml`)
//! 4. Explicit file passed by the caller
//! 5. `PHISHCHECK_THRESHOLD` environment variable
//!
//! Implicitly discovered files that fail to parse are logged and skipped.
//! An explicitly requested file that fails to load is an error.

use crate::scoring::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "phishcheck.toml";

/// Environment variable overriding the threshold
pub const THRESHOLD_ENV: &str = "PHISHCHECK_THRESHOLD";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid TOML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid {var} value '{value}': expected a non-negative integer")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckerConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Inclusive lower bound of the Phishing class (default: 4)
    pub threshold: Option<u32>,
}

impl CheckerConfig {
    /// Config with an explicit threshold
    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            scoring: ScoringConfig {
                threshold: Some(threshold),
            },
        }
    }

    /// Effective threshold
    pub fn threshold(&self) -> u32 {
        self.scoring.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Load config from all sources.
    ///
    /// `project_dir` is searched for `phishcheck.toml`; `explicit` is a
    /// file the caller asked for by name.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_layers(
            Self::user_config_path().as_deref(),
            project_dir,
            explicit,
            std::env::var(THRESHOLD_ENV).ok().as_deref(),
        )
    }

    /// Apply every layer in priority order. `env_threshold` is the raw
    /// value of `PHISHCHECK_THRESHOLD`, if set.
    fn load_layers(
        user_config: Option<&Path>,
        project_dir: &Path,
        explicit: Option<&Path>,
        env_threshold: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = CheckerConfig::default();

        let project_config = project_dir.join(PROJECT_CONFIG_FILE);
        let implicit = [user_config, Some(project_config.as_path())];
        for path in implicit.into_iter().flatten().filter(|p| p.exists()) {
            match Self::from_file(path) {
                Ok(layer) => {
                    debug!("Loaded config from {}", path.display());
                    config.merge(layer);
                }
                Err(e) => warn!("Ignoring config: {}", e),
            }
        }

        if let Some(path) = explicit {
            config.merge(Self::from_file(path)?);
            debug!("Loaded config from {}", path.display());
        }

        if let Some(value) = env_threshold {
            config.scoring.threshold = Some(parse_threshold(value)?);
        }

        Ok(config)
    }

    /// Parse a single TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("phishcheck").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: CheckerConfig) {
        if other.scoring.threshold.is_some() {
            self.scoring.threshold = other.scoring.threshold;
        }
    }
}

fn parse_threshold(value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var: THRESHOLD_ENV,
        value: value.to_string(),
    })
}
