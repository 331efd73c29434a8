//! TaskConfig loading, validation, and serialization.

use super::model::TaskConfig;
use crate::error::{Result, SparkError};
use std::path::Path;

impl TaskConfig {
    /// Load config from a YAML file and validate it.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the task config file
    ///
    /// # Returns
    ///
    /// * `Ok(TaskConfig)` - Successfully loaded and validated config
    /// * `Err(SparkError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = read_config_file(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Load config from a YAML file without validating.
    ///
    /// Used when command-line overrides will be applied before validation,
    /// e.g. a payload file without a `uri` plus a `--uri` flag.
    pub fn load_unvalidated<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = read_config_file(path.as_ref())?;
        parse_yaml(&content)
    }

    /// Parse config from a YAML string and validate it.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config = parse_yaml(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SparkError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `uri` must be non-empty after trimming
    ///
    /// The payload strings are not validated here: malformed segments are a
    /// parser concern and degrade to partial results by design.
    pub fn validate(&self) -> Result<()> {
        if self.uri.trim().is_empty() {
            return Err(SparkError::ConfigError(
                "config validation failed: uri must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        SparkError::ConfigError(format!(
            "failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })
}

fn parse_yaml(yaml: &str) -> Result<TaskConfig> {
    serde_yaml::from_str(yaml)
        .map_err(|e| SparkError::ConfigError(format!("failed to parse config YAML: {}", e)))
}
