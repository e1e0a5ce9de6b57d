//! Reconciliation result models.
//!
//! This module contains the [`PeriodReconciliationResult`] type and the audit
//! structures that explain how each of its totals was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceLine, OvertimeLine, PayPeriodRecord};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during reconciliation.
///
/// Warnings indicate values that were adjusted or look suspicious but did
/// not prevent the period from being reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The ordered audit trail of a reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated along the way.
    pub warnings: Vec<AuditWarning>,
}

/// The reconciled hours for one pay period.
///
/// Built fresh for every reconciliation and handed to the result store only
/// once all calculations have run.
///
/// # Example
///
/// ```
/// use hour_reconciler::models::{PayPeriodRecord, PeriodReconciliationResult};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriodRecord {
///     id: "PP-2026-01".to_string(),
///     employee_id: "EMP-0001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
/// let result = PeriodReconciliationResult::empty(&period);
///
/// assert_eq!(result.regular_working_hours, Decimal::ZERO);
/// assert!(!result.has_lines());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodReconciliationResult {
    /// The pay period record this result belongs to.
    pub period_id: String,
    /// The employee the hours were reconciled for.
    pub employee_id: String,
    /// Billable attendance days, in attendance order.
    pub attendance_lines: Vec<AttendanceLine>,
    /// Timesheets counted as regular overtime.
    pub regular_overtime_lines: Vec<OvertimeLine>,
    /// Timesheets counted as holiday overtime.
    pub holiday_overtime_lines: Vec<OvertimeLine>,
    /// Regular hours after leave deduction and cap rebalancing.
    pub regular_working_hours: Decimal,
    /// Regular overtime hours after cap rebalancing.
    pub overtime_hours: Decimal,
    /// Holiday overtime hours; never subject to the cap.
    pub holiday_hours: Decimal,
    /// How the totals were derived.
    pub audit_trace: AuditTrace,
}

impl PeriodReconciliationResult {
    /// Creates a result with no lines and zeroed totals.
    pub fn empty(period: &PayPeriodRecord) -> Self {
        Self {
            period_id: period.id.clone(),
            employee_id: period.employee_id.clone(),
            attendance_lines: Vec::new(),
            regular_overtime_lines: Vec::new(),
            holiday_overtime_lines: Vec::new(),
            regular_working_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            audit_trace: AuditTrace::default(),
        }
    }

    /// Returns `true` if any attendance or overtime line was recorded.
    ///
    /// Results without lines are not persisted.
    pub fn has_lines(&self) -> bool {
        !self.attendance_lines.is_empty()
            || !self.regular_overtime_lines.is_empty()
            || !self.holiday_overtime_lines.is_empty()
    }

    /// Sum of billable hours over all attendance lines.
    pub fn total_billable_hours(&self) -> Decimal {
        self.attendance_lines.iter().map(|l| l.billable_hours).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_period() -> PayPeriodRecord {
        PayPeriodRecord {
            id: "PP-2026-01".to_string(),
            employee_id: "EMP-0001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        }
    }

    fn sample_line(billable: &str) -> AttendanceLine {
        AttendanceLine {
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            hours_worked: dec("9"),
            include_unpaid_breaks: false,
            unpaid_break_minutes: Decimal::ZERO,
            min_hours_to_include_break: Decimal::ZERO,
            billable_hours: dec(billable),
        }
    }

    #[test]
    fn test_empty_result_carries_period_identity() {
        let result = PeriodReconciliationResult::empty(&sample_period());
        assert_eq!(result.period_id, "PP-2026-01");
        assert_eq!(result.employee_id, "EMP-0001");
        assert!(result.audit_trace.steps.is_empty());
    }

    #[test]
    fn test_has_lines_with_only_holiday_overtime() {
        let mut result = PeriodReconciliationResult::empty(&sample_period());
        result.holiday_overtime_lines.push(OvertimeLine {
            source_id: "TS-0001".to_string(),
            hours: dec("4"),
        });
        assert!(result.has_lines());
    }

    #[test]
    fn test_total_billable_hours() {
        let mut result = PeriodReconciliationResult::empty(&sample_period());
        result.attendance_lines.push(sample_line("8.5"));
        result.attendance_lines.push(sample_line("7.25"));
        assert_eq!(result.total_billable_hours(), dec("15.75"));
    }

    #[test]
    fn test_serialize_result_shape() {
        let mut result = PeriodReconciliationResult::empty(&sample_period());
        result.attendance_lines.push(sample_line("8"));
        result.regular_working_hours = dec("8");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["period_id"], "PP-2026-01");
        assert_eq!(json["regular_working_hours"], "8");
        assert_eq!(json["attendance_lines"].as_array().unwrap().len(), 1);
        assert!(json["audit_trace"]["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_audit_warning_roundtrips_through_json() {
        let warning = AuditWarning {
            code: "NEGATIVE_BILLABLE_HOURS".to_string(),
            message: "Break exceeds hours worked".to_string(),
            severity: "medium".to_string(),
        };
        let json = serde_json::to_string(&warning).unwrap();
        let back: AuditWarning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, warning);
    }
}
