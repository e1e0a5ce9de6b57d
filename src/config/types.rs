//! Configuration types for hour reconciliation.
//!
//! This module contains the settings structure deserialized from YAML and the
//! validated [`ReconciliationConfig`] the reconciler runs with.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ReconcileError, ReconcileResult};

/// Settings as they appear in the configuration file.
///
/// Every field is optional so that a missing setting can be reported by
/// name instead of as a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReconciliationSettings {
    /// Maximum regular hours payable in one pay period.
    pub maximum_monthly_hours: Option<Decimal>,
    /// Timesheet activity type counted as regular overtime.
    pub regular_overtime_activity: Option<String>,
    /// Timesheet activity type counted as holiday overtime.
    pub holiday_overtime_activity: Option<String>,
}

/// Validated settings for a reconciliation run.
///
/// Loaded once per batch and shared read-only by every pay period in it.
///
/// # Example
///
/// ```
/// use hour_reconciler::config::ReconciliationConfig;
/// use rust_decimal::Decimal;
///
/// let config = ReconciliationConfig::new(
///     Decimal::from(208),
///     "Overtime 1.5",
///     "Overtime 2.0",
/// )?;
/// assert_eq!(config.maximum_monthly_hours(), Decimal::from(208));
///
/// // Both overtime buckets must use distinct activity types.
/// assert!(ReconciliationConfig::new(Decimal::from(208), "Overtime", "Overtime").is_err());
/// # Ok::<(), hour_reconciler::error::ReconcileError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciliationConfig {
    maximum_monthly_hours: Decimal,
    regular_overtime_activity: String,
    holiday_overtime_activity: String,
}

impl ReconciliationConfig {
    /// Creates a validated configuration.
    ///
    /// Fails with a configuration error if the cap is negative, either
    /// activity type is blank, or both activity types are the same.
    pub fn new(
        maximum_monthly_hours: Decimal,
        regular_overtime_activity: impl Into<String>,
        holiday_overtime_activity: impl Into<String>,
    ) -> ReconcileResult<Self> {
        let regular_overtime_activity = regular_overtime_activity.into();
        let holiday_overtime_activity = holiday_overtime_activity.into();

        if maximum_monthly_hours < Decimal::ZERO {
            return Err(ReconcileError::InvalidConfigValue {
                field: "maximum_monthly_hours".to_string(),
                message: format!("must not be negative, got {}", maximum_monthly_hours),
            });
        }
        for (field, value) in [
            ("regular_overtime_activity", &regular_overtime_activity),
            ("holiday_overtime_activity", &holiday_overtime_activity),
        ] {
            if value.trim().is_empty() {
                return Err(ReconcileError::InvalidConfigValue {
                    field: field.to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        if regular_overtime_activity == holiday_overtime_activity {
            return Err(ReconcileError::OvertimeTagCollision {
                tag: regular_overtime_activity,
            });
        }

        Ok(Self {
            maximum_monthly_hours,
            regular_overtime_activity,
            holiday_overtime_activity,
        })
    }

    /// Maximum regular hours payable in one pay period.
    pub fn maximum_monthly_hours(&self) -> Decimal {
        self.maximum_monthly_hours
    }

    /// Activity type counted as regular overtime.
    pub fn regular_overtime_activity(&self) -> &str {
        &self.regular_overtime_activity
    }

    /// Activity type counted as holiday overtime.
    pub fn holiday_overtime_activity(&self) -> &str {
        &self.holiday_overtime_activity
    }
}

impl TryFrom<ReconciliationSettings> for ReconciliationConfig {
    type Error = ReconcileError;

    fn try_from(settings: ReconciliationSettings) -> ReconcileResult<Self> {
        fn required<T>(value: Option<T>, field: &str) -> ReconcileResult<T> {
            value.ok_or_else(|| ReconcileError::MissingConfigValue {
                field: field.to_string(),
            })
        }

        Self::new(
            required(settings.maximum_monthly_hours, "maximum_monthly_hours")?,
            required(settings.regular_overtime_activity, "regular_overtime_activity")?,
            required(settings.holiday_overtime_activity, "holiday_overtime_activity")?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn complete_settings() -> ReconciliationSettings {
        ReconciliationSettings {
            maximum_monthly_hours: Some(dec("208")),
            regular_overtime_activity: Some("Overtime 1.5".to_string()),
            holiday_overtime_activity: Some("Overtime 2.0".to_string()),
        }
    }

    #[test]
    fn test_complete_settings_convert() {
        let config = ReconciliationConfig::try_from(complete_settings()).unwrap();
        assert_eq!(config.maximum_monthly_hours(), dec("208"));
        assert_eq!(config.regular_overtime_activity(), "Overtime 1.5");
        assert_eq!(config.holiday_overtime_activity(), "Overtime 2.0");
    }

    #[test]
    fn test_missing_cap_is_named() {
        let settings = ReconciliationSettings {
            maximum_monthly_hours: None,
            ..complete_settings()
        };
        match ReconciliationConfig::try_from(settings) {
            Err(ReconcileError::MissingConfigValue { field }) => {
                assert_eq!(field, "maximum_monthly_hours");
            }
            other => panic!("Expected MissingConfigValue, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_holiday_tag_is_named() {
        let settings = ReconciliationSettings {
            holiday_overtime_activity: None,
            ..complete_settings()
        };
        match ReconciliationConfig::try_from(settings) {
            Err(ReconcileError::MissingConfigValue { field }) => {
                assert_eq!(field, "holiday_overtime_activity");
            }
            other => panic!("Expected MissingConfigValue, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_cap_rejected() {
        let result = ReconciliationConfig::new(dec("-1"), "A", "B");
        assert!(matches!(
            result,
            Err(ReconcileError::InvalidConfigValue { ref field, .. }) if field == "maximum_monthly_hours"
        ));
    }

    #[test]
    fn test_zero_cap_allowed() {
        assert!(ReconciliationConfig::new(Decimal::ZERO, "A", "B").is_ok());
    }

    #[test]
    fn test_blank_tag_rejected() {
        let result = ReconciliationConfig::new(dec("208"), "  ", "Overtime 2.0");
        assert!(matches!(
            result,
            Err(ReconcileError::InvalidConfigValue { ref field, .. }) if field == "regular_overtime_activity"
        ));
    }

    #[test]
    fn test_tag_collision_rejected() {
        let result = ReconciliationConfig::new(dec("208"), "Overtime", "Overtime");
        match result {
            Err(ReconcileError::OvertimeTagCollision { tag }) => assert_eq!(tag, "Overtime"),
            other => panic!("Expected OvertimeTagCollision, got {:?}", other),
        }
    }
}
