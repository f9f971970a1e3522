//! Configuration for the routing policy.
//!
//! Loads the fast-track threshold and fraud keyword list from TOML. Every key is
//! optional; omitted keys keep their defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Damage estimates strictly below this amount are fast-tracked
pub const DEFAULT_FAST_TRACK_THRESHOLD: Decimal = Decimal::from_parts(25_000, 0, 0, false, 0);

/// Words whose presence anywhere in a document sends it to investigation
pub const DEFAULT_FRAUD_KEYWORDS: [&str; 5] =
    ["fraud", "inconsistent", "staged", "suspicious", "fabricated"];

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A value is out of range
    #[error("Invalid configuration value: {0}")]
    Invalid(String),
}

/// Routing policy parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Upper bound (exclusive) for fast-track damage estimates
    pub fast_track_threshold: Decimal,

    /// Case-insensitive fraud indicator substrings
    pub fraud_keywords: Vec<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            fast_track_threshold: DEFAULT_FAST_TRACK_THRESHOLD,
            fraud_keywords: DEFAULT_FRAUD_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl RouterConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fast_track_threshold <= Decimal::ZERO {
            return Err(ConfigError::Invalid(
                "fast_track_threshold must be greater than 0".to_string(),
            ));
        }
        if self.fraud_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "fraud_keywords must contain at least one non-blank keyword".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
