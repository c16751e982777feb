//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// How violations are reported when construction fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Validate every field and report all violations together
    #[default]
    Aggregate,

    /// Stop at the first violation
    FailFast,
}

/// Validation settings applied while components are constructed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Reporting policy (defaults to `aggregate`)
    #[serde(default)]
    pub mode: ValidationMode,
}

impl ValidationConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Configuration that stops at the first violation
    pub fn fail_fast() -> Self {
        Self {
            mode: ValidationMode::FailFast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_aggregate() {
        assert_eq!(ValidationConfig::default().mode, ValidationMode::Aggregate);
    }

    #[test]
    fn test_from_yaml_str_fail_fast() {
        let config = ValidationConfig::from_yaml_str("mode: fail_fast\n").unwrap();
        assert_eq!(config, ValidationConfig::fail_fast());
    }

    #[test]
    fn test_from_yaml_str_missing_mode_uses_default() {
        let config = ValidationConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.mode, ValidationMode::Aggregate);
    }

    #[test]
    fn test_from_yaml_str_unknown_mode_fails() {
        assert!(ValidationConfig::from_yaml_str("mode: lenient\n").is_err());
    }

    #[test]
    fn test_from_yaml_file_missing_file_fails() {
        assert!(ValidationConfig::from_yaml_file("/nonexistent/blockkit.yaml").is_err());
    }
}
