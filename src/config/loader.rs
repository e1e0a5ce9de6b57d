//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading reconciliation
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReconcileError, ReconcileResult};

use super::types::{ReconciliationConfig, ReconciliationSettings};

/// Loads and validates reconciliation settings.
///
/// # File Format
///
/// ```text
/// maximum_monthly_hours: "208"
/// regular_overtime_activity: "Overtime 1.5"
/// holiday_overtime_activity: "Overtime 2.0"
/// ```
///
/// # Example
///
/// ```no_run
/// use hour_reconciler::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/reconciliation.yaml")?;
/// println!("Cap: {} hours", loader.config().maximum_monthly_hours());
/// # Ok::<(), hour_reconciler::error::ReconcileError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReconciliationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A required setting is absent or invalid
    pub fn load<P: AsRef<Path>>(path: P) -> ReconcileResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReconcileError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        debug!(
            path = %path_str,
            maximum_monthly_hours = %loader.config.maximum_monthly_hours(),
            "Loaded reconciliation configuration"
        );
        Ok(loader)
    }

    /// Loads configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> ReconcileResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> ReconcileResult<Self> {
        let settings: ReconciliationSettings =
            serde_yaml::from_str(content).map_err(|e| ReconcileError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            config: ReconciliationConfig::try_from(settings)?,
        })
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &ReconciliationConfig {
        &self.config
    }

    /// Consumes the loader, returning the validated configuration.
    pub fn into_config(self) -> ReconciliationConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/reconciliation.yaml"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().maximum_monthly_hours(), Decimal::from(208));
        assert_eq!(loader.config().regular_overtime_activity(), "Overtime 1.5");
        assert_eq!(loader.config().holiday_overtime_activity(), "Overtime 2.0");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/reconciliation.yaml") {
            Err(ReconcileError::ConfigNotFound { path }) => {
                assert!(path.contains("reconciliation.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        match ConfigLoader::load("./tests/fixtures/malformed.yaml") {
            Err(ReconcileError::ConfigParseError { path, .. }) => {
                assert!(path.contains("malformed.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_cap_names_field() {
        match ConfigLoader::load("./tests/fixtures/missing_cap.yaml") {
            Err(ReconcileError::MissingConfigValue { field }) => {
                assert_eq!(field, "maximum_monthly_hours");
            }
            other => panic!("Expected MissingConfigValue, got {:?}", other),
        }
    }

    #[test]
    fn test_load_tag_collision() {
        let result = ConfigLoader::load("./tests/fixtures/tag_collision.yaml");
        assert!(matches!(
            result,
            Err(ReconcileError::OvertimeTagCollision { .. })
        ));
    }

    #[test]
    fn test_numeric_cap_in_yaml() {
        let loader = ConfigLoader::from_yaml_str(
            "maximum_monthly_hours: 173.5\n\
             regular_overtime_activity: OT-REG\n\
             holiday_overtime_activity: OT-HOL\n",
        )
        .unwrap();
        assert_eq!(
            loader.config().maximum_monthly_hours(),
            Decimal::new(1735, 1)
        );
    }

    #[test]
    fn test_into_config() {
        let config = ConfigLoader::load(config_path()).unwrap().into_config();
        assert_eq!(config.regular_overtime_activity(), "Overtime 1.5");
    }
}
