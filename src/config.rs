//! Configuration for the demo binary.
//!
//! ```
//! use carpark::config::{Algorithm, DemoConfig};
//!
//! let config = DemoConfig::from_toml_str(r#"
//!     slots = 6
//!     seed = 17
//!     algorithm = "linear"
//! "#).unwrap();
//!
//! assert_eq!(config.slots, 6);
//! assert_eq!(config.algorithm, Algorithm::Linear);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Linear,
    #[default]
    Minimal,
    Enumerate,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DemoConfig {
    /// Number of slots, the empty one included.
    pub slots: u32,

    /// Seed for the goal shuffle; a fresh random goal when absent.
    pub seed: Option<u64>,

    pub algorithm: Algorithm,

    /// Largest lot the exhaustive enumeration is run on.
    pub enumerate_max_slots: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            slots: 8,
            seed: None,
            algorithm: Algorithm::default(),
            enumerate_max_slots: 4,
        }
    }
}

impl DemoConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid TOML or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots < 2 {
            return Err(ConfigError::Invalid(format!(
                "a lot needs at least 2 slots, got {}",
                self.slots
            )));
        }
        if self.algorithm == Algorithm::Enumerate && self.slots > self.enumerate_max_slots {
            return Err(ConfigError::Invalid(format!(
                "enumeration is limited to {} slots, got {}",
                self.enumerate_max_slots, self.slots
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_keys() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.algorithm, Algorithm::Minimal);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_toml_parsing() {
        let config = DemoConfig::from_toml_str(
            r#"
            slots = 4
            seed = 99
            algorithm = "enumerate"
            enumerate_max_slots = 5
        "#,
        )
        .unwrap();

        assert_eq!(config.slots, 4);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.algorithm, Algorithm::Enumerate);
        assert_eq!(config.enumerate_max_slots, 5);
    }

    #[test]
    fn test_rejects_tiny_lot() {
        let err = DemoConfig::from_toml_str("slots = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_large_enumeration() {
        let err = DemoConfig::from_toml_str(
            r#"
            slots = 9
            algorithm = "enumerate"
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = DemoConfig::from_toml_str(r#"algorithm = "bogus""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DemoConfig::load("/nonexistent/carpark.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
