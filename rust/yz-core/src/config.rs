//! Configuration schema for callers of the scoring engine.
//!
//! The engine itself is stateless; this only controls how input is validated
//! and where score events are logged.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::roll::Validation;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Roll validation settings.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Score event logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// "strict" rejects faces outside 1..=6; "permissive" only checks the dice count.
    #[serde(default)]
    pub validation: Validation,
}

/// NDJSON event log configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Append score events to this file. If None, nothing is logged.
    #[serde(default)]
    pub events_path: Option<String>,
    /// Flush after this many events (0 flushes only on exit).
    #[serde(default = "default_flush_every_lines")]
    pub flush_every_lines: u64,
}

fn default_flush_every_lines() -> u64 {
    1
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            events_path: None,
            flush_every_lines: default_flush_every_lines(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_yaml() {
        // Load the actual config file from the repo
        let config =
            Config::load("../../configs/default.yaml").expect("Failed to load configs/default.yaml");
        assert_eq!(config.scoring.validation, Validation::Strict);
        assert_eq!(config.logging.events_path, None);
        assert_eq!(config.logging.flush_every_lines, 1);
    }

    #[test]
    fn test_parse_yaml_string() {
        let yaml = r#"
scoring:
  validation: permissive

logging:
  events_path: "logs/scores.ndjson"
"#;

        let config = Config::from_yaml(yaml).expect("Failed to parse YAML");
        assert_eq!(config.scoring.validation, Validation::Permissive);
        assert_eq!(
            config.logging.events_path.as_deref(),
            Some("logs/scores.ndjson")
        );
        // Check defaults are applied
        assert_eq!(config.logging.flush_every_lines, 1);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_validation_mode_fails() {
        let yaml = "scoring:\n  validation: lenient\n";
        assert!(matches!(Config::from_yaml(yaml), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let invalid_yaml = "this is not: valid: yaml: {{{}}}";
        let result = Config::from_yaml(invalid_yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_yaml_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.yaml");
        let mut cfg = Config::default();
        cfg.scoring.validation = Validation::Permissive;
        cfg.logging.flush_every_lines = 16;
        std::fs::write(&path, serde_yaml::to_string(&cfg).unwrap()).unwrap();
        assert_eq!(Config::load(&path).unwrap(), cfg);
    }
}
