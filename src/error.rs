//! Error types for the hour reconciler.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while reconciling a pay period.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the hour reconciler.
///
/// Every fallible operation in the crate returns this error type. The
/// configuration variants are checked before any pay period is processed;
/// the remaining variants halt the pay period they occur in.
///
/// # Example
///
/// ```
/// use hour_reconciler::error::ReconcileError;
/// use chrono::NaiveDate;
///
/// let error = ReconcileError::NoShiftAssignment {
///     employee_id: "EMP-0001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "No shift assignment found for employee 'EMP-0001' between 2026-01-01 and 2026-01-31"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// No active shift assignment covers the pay period.
    #[error("No shift assignment found for employee '{employee_id}' between {start_date} and {end_date}")]
    NoShiftAssignment {
        /// The employee whose shift could not be resolved.
        employee_id: String,
        /// Start of the pay period (inclusive).
        start_date: NaiveDate,
        /// End of the pay period (inclusive).
        end_date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required configuration value was not provided.
    #[error("Missing configuration value: {field}")]
    MissingConfigValue {
        /// The name of the missing setting.
        field: String,
    },

    /// A configuration value was present but unusable.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfigValue {
        /// The name of the offending setting.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Regular and holiday overtime share the same activity type.
    #[error("Regular and holiday overtime both use activity type '{tag}'")]
    OvertimeTagCollision {
        /// The activity type configured for both buckets.
        tag: String,
    },

    /// Source records hold values the reconciliation cannot compute with.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the records.
        message: String,
    },

    /// Writing a reconciled result failed.
    #[error("Failed to persist pay period '{period_id}': {message}")]
    Persistence {
        /// The pay period record that could not be written.
        period_id: String,
        /// A description of the failure.
        message: String,
    },

    /// Reading source records from a data collaborator failed.
    #[error("Failed to read {source_name}: {message}")]
    DataAccess {
        /// The kind of record being read (e.g. "attendance").
        source_name: String,
        /// A description of the failure.
        message: String,
    },
}

impl ReconcileError {
    /// Returns `true` for errors caused by missing or inconsistent settings.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ReconcileError::ConfigNotFound { .. }
                | ReconcileError::ConfigParseError { .. }
                | ReconcileError::MissingConfigValue { .. }
                | ReconcileError::InvalidConfigValue { .. }
                | ReconcileError::OvertimeTagCollision { .. }
        )
    }

    /// A stable, machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ReconcileError::NoShiftAssignment { .. } => "NO_SHIFT_ASSIGNMENT",
            ReconcileError::ConfigNotFound { .. }
            | ReconcileError::ConfigParseError { .. }
            | ReconcileError::MissingConfigValue { .. }
            | ReconcileError::InvalidConfigValue { .. }
            | ReconcileError::OvertimeTagCollision { .. } => "CONFIG_ERROR",
            ReconcileError::InvalidInput { .. } => "INVALID_INPUT",
            ReconcileError::Persistence { .. } => "PERSISTENCE_ERROR",
            ReconcileError::DataAccess { .. } => "DATA_ACCESS_ERROR",
        }
    }
}

/// A type alias for Results that return ReconcileError.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_shift_assignment_names_employee_and_period() {
        let error = ReconcileError::NoShiftAssignment {
            employee_id: "EMP-0042".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No shift assignment found for employee 'EMP-0042' between 2026-02-01 and 2026-02-28"
        );
        assert_eq!(error.code(), "NO_SHIFT_ASSIGNMENT");
        assert!(!error.is_configuration_error());
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ReconcileError::ConfigNotFound {
            path: "/missing/reconciliation.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/reconciliation.yaml"
        );
    }

    #[test]
    fn test_missing_config_value_displays_field() {
        let error = ReconcileError::MissingConfigValue {
            field: "maximum_monthly_hours".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing configuration value: maximum_monthly_hours"
        );
        assert!(error.is_configuration_error());
    }

    #[test]
    fn test_tag_collision_is_configuration_error() {
        let error = ReconcileError::OvertimeTagCollision {
            tag: "Overtime".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Regular and holiday overtime both use activity type 'Overtime'"
        );
        assert!(error.is_configuration_error());
        assert_eq!(error.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_persistence_error_displays_period_and_message() {
        let error = ReconcileError::Persistence {
            period_id: "Sal Slip/EMP-0001/00001".to_string(),
            message: "record is locked".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to persist pay period 'Sal Slip/EMP-0001/00001': record is locked"
        );
        assert_eq!(error.code(), "PERSISTENCE_ERROR");
    }

    #[test]
    fn test_invalid_input_displays_message() {
        let error = ReconcileError::InvalidInput {
            message: "attendance total overflowed".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid input: attendance total overflowed");
        assert_eq!(error.code(), "INVALID_INPUT");
        assert!(!error.is_configuration_error());
    }

    #[test]
    fn test_data_access_error_displays_source() {
        let error = ReconcileError::DataAccess {
            source_name: "attendance".to_string(),
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to read attendance: connection reset");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ReconcileError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_value() -> ReconcileResult<()> {
            Err(ReconcileError::MissingConfigValue {
                field: "regular_overtime_activity".to_string(),
            })
        }

        fn propagates_error() -> ReconcileResult<()> {
            returns_missing_value()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
