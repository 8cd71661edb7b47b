//! Configuration module for phishcheck
//!
//! This module handles:
//! - The Phishing threshold (`[scoring] threshold`)
//! - Layered loading from user and project TOML files
//! - Environment overrides

mod checker_config;

pub use checker_config::{
    CheckerConfig, ConfigError, ScoringConfig, PROJECT_CONFIG_FILE, THRESHOLD_ENV,
};
