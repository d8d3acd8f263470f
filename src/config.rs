//! YAML Configuration File Support for SwipeCard
//!
//! Loads the swipe and bio-panel tuning from a single YAML file. Every
//! section is optional and every field inside a section falls back to its
//! default, so a file only needs to name what it changes.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "slow motion demo"
//!
//! swipe:
//!   commit_distance: 100
//!   flick_velocity: 500
//!   flick_min_offset: 20
//!   exit_distance: 200
//!   farewell_distance: 1000
//!   badge_threshold: 50
//!   rotation_factor: 0.1
//!   settle_ms: 300
//!   match_dismiss_ms: 4000
//!
//! bio:
//!   dismiss_distance: 80
//!   flick_velocity: 500
//!   flick_min_offset: 20
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use swipe::{BioConfig, SwipeConfig};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(#[from] swipe::ConfigError),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for a deck session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Card swiping thresholds and timings
    #[serde(default)]
    pub swipe: SwipeConfig,

    /// Bio panel drag-to-dismiss thresholds
    #[serde(default)]
    pub bio: BioConfig,
}

impl AppConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }
        self.swipe.validate()?;
        self.bio.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            name: None,
            swipe: SwipeConfig::default(),
            bio: BioConfig::default(),
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}
