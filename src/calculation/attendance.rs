//! Attendance aggregation functionality.
//!
//! This module turns the raw attendance register for a pay period into billable
//! attendance lines, dropping holidays and empty days and applying the unpaid
//! break rule.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::ReconcileResult;
use crate::models::{AttendanceEntry, AttendanceLine, AuditStep, AuditWarning};

use super::hour_overflow;

const MINUTES_PER_HOUR: i64 = 60;

/// The result of aggregating a period's attendance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceAggregation {
    /// One line per retained entry, in input order.
    pub lines: Vec<AttendanceLine>,
    /// Sum of `billable_hours` over all lines.
    pub total_billable_hours: Decimal,
    /// The audit step recording this aggregation.
    pub audit_step: AuditStep,
    /// Warnings for entries whose hours had to be adjusted.
    pub warnings: Vec<AuditWarning>,
}

/// Computes the billable hours for a single attendance entry.
///
/// - Breaks not deducted: the entry's `payment_hours`.
/// - Breaks deducted and more than `min_hours_to_include_break` worked:
///   `working_hours` less the unpaid break.
/// - Otherwise: `working_hours`.
///
/// The result is not clamped; a break longer than the day yields a negative
/// value which [`aggregate_attendance`] floors at zero.
///
/// # Errors
///
/// [`InvalidInput`] if deducting the break overflows.
///
/// [`InvalidInput`]: crate::error::ReconcileError::InvalidInput
///
/// # Examples
///
/// ```
/// use hour_reconciler::calculation::billable_hours;
/// use hour_reconciler::models::AttendanceEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut entry = AttendanceEntry {
///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     working_hours: Decimal::from(9),
///     include_unpaid_breaks: true,
///     unpaid_break_minutes: Decimal::from(30),
///     min_hours_to_include_break: Decimal::from(8),
///     payment_hours: Decimal::from(9),
/// };
/// assert_eq!(billable_hours(&entry)?, Decimal::from_str("8.5").unwrap());
///
/// // Below the threshold the break is not deducted.
/// entry.working_hours = Decimal::from(7);
/// assert_eq!(billable_hours(&entry)?, Decimal::from(7));
/// # Ok::<(), hour_reconciler::error::ReconcileError>(())
/// ```
pub fn billable_hours(entry: &AttendanceEntry) -> ReconcileResult<Decimal> {
    if !entry.include_unpaid_breaks {
        Ok(entry.payment_hours)
    } else if entry.working_hours > entry.min_hours_to_include_break {
        let break_hours = entry.unpaid_break_minutes / Decimal::from(MINUTES_PER_HOUR);
        entry
            .working_hours
            .checked_sub(break_hours)
            .ok_or_else(|| hour_overflow(&format!("Billable time on {}", entry.date)))
    } else {
        Ok(entry.working_hours)
    }
}

/// Aggregates attendance entries into billable attendance lines.
///
/// An entry is skipped when its date is in `holiday_dates` or when it has no
/// positive working hours. Every other entry produces exactly one line,
/// preserving input order.
///
/// Fails with [`InvalidInput`] if an entry or the running total overflows.
///
/// [`InvalidInput`]: crate::error::ReconcileError::InvalidInput
///
/// # Arguments
///
/// * `entries` - The period's attendance register, in date order
/// * `holiday_dates` - The employee's holiday dates
/// * `step_number` - The step number for audit trail sequencing
pub fn aggregate_attendance(
    entries: &[AttendanceEntry],
    holiday_dates: &HashSet<NaiveDate>,
    step_number: u32,
) -> ReconcileResult<AttendanceAggregation> {
    let mut lines = Vec::with_capacity(entries.len());
    let mut warnings = Vec::new();
    let mut total_billable_hours = Decimal::ZERO;
    let mut skipped_holidays = 0usize;
    let mut skipped_empty = 0usize;

    for entry in entries {
        if holiday_dates.contains(&entry.date) {
            skipped_holidays += 1;
            continue;
        }
        if entry.working_hours <= Decimal::ZERO {
            skipped_empty += 1;
            continue;
        }

        let mut billable = billable_hours(entry)?;
        if billable < Decimal::ZERO {
            warn!(
                date = %entry.date,
                working_hours = %entry.working_hours,
                unpaid_break_minutes = %entry.unpaid_break_minutes,
                "Unpaid break exceeds hours worked, billing zero hours"
            );
            warnings.push(AuditWarning {
                code: "NEGATIVE_BILLABLE_HOURS".to_string(),
                message: format!(
                    "Unpaid break of {} minutes on {} exceeds {} hours worked; billable hours set to 0",
                    entry.unpaid_break_minutes.normalize(),
                    entry.date,
                    entry.working_hours.normalize()
                ),
                severity: "medium".to_string(),
            });
            billable = Decimal::ZERO;
        }

        total_billable_hours = total_billable_hours
            .checked_add(billable)
            .ok_or_else(|| hour_overflow("Billable attendance total"))?;
        lines.push(AttendanceLine::from_entry(entry, billable));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_aggregation".to_string(),
        rule_name: "Attendance Aggregation".to_string(),
        input: serde_json::json!({
            "entries": entries.len(),
            "holiday_dates": holiday_dates.len()
        }),
        output: serde_json::json!({
            "lines": lines.len(),
            "skipped_holidays": skipped_holidays,
            "skipped_without_hours": skipped_empty,
            "total_billable_hours": total_billable_hours.normalize().to_string()
        }),
        reasoning: format!(
            "{} of {} attendance days billed for {} hours ({} on holidays, {} without hours)",
            lines.len(),
            entries.len(),
            total_billable_hours.normalize(),
            skipped_holidays,
            skipped_empty
        ),
    };

    Ok(AttendanceAggregation {
        lines,
        total_billable_hours,
        audit_step,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReconcileError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn entry(day: u32, working: &str) -> AttendanceEntry {
        AttendanceEntry {
            date: date(day),
            working_hours: dec(working),
            include_unpaid_breaks: false,
            unpaid_break_minutes: Decimal::ZERO,
            min_hours_to_include_break: Decimal::ZERO,
            payment_hours: dec(working),
        }
    }

    fn entry_with_break(day: u32, working: &str, minutes: &str, threshold: &str) -> AttendanceEntry {
        AttendanceEntry {
            include_unpaid_breaks: true,
            unpaid_break_minutes: dec(minutes),
            min_hours_to_include_break: dec(threshold),
            ..entry(day, working)
        }
    }

    /// AT-001: break deducted above threshold
    #[test]
    fn test_break_deducted_above_threshold() {
        let e = entry_with_break(5, "9", "30", "8");
        assert_eq!(billable_hours(&e).unwrap(), dec("8.5"));
    }

    /// AT-002: break not deducted below threshold
    #[test]
    fn test_break_not_deducted_below_threshold() {
        let e = entry_with_break(5, "7", "30", "8");
        assert_eq!(billable_hours(&e).unwrap(), dec("7"));
    }

    /// AT-003: break not deducted exactly at threshold
    #[test]
    fn test_break_not_deducted_at_threshold() {
        let e = entry_with_break(5, "8", "30", "8");
        assert_eq!(billable_hours(&e).unwrap(), dec("8"));
    }

    /// AT-004: payment hours used when breaks are excluded
    #[test]
    fn test_payment_hours_when_breaks_excluded() {
        let e = AttendanceEntry {
            payment_hours: dec("7.5"),
            ..entry(5, "9")
        };
        assert_eq!(billable_hours(&e).unwrap(), dec("7.5"));
    }

    #[test]
    fn test_holidays_and_empty_days_skipped() {
        let entries = vec![entry(5, "8"), entry(6, "8"), entry(7, "0"), entry(8, "-1")];
        let holidays: HashSet<NaiveDate> = [date(6)].into_iter().collect();

        let result = aggregate_attendance(&entries, &holidays, 1).unwrap();

        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].date, date(5));
        assert_eq!(result.total_billable_hours, dec("8"));
        assert_eq!(result.audit_step.output["skipped_holidays"], 1);
        assert_eq!(result.audit_step.output["skipped_without_hours"], 2);
    }

    #[test]
    fn test_order_preserved() {
        let entries = vec![entry(9, "6"), entry(2, "7"), entry(5, "8")];
        let result = aggregate_attendance(&entries, &HashSet::new(), 1).unwrap();

        let dates: Vec<NaiveDate> = result.lines.iter().map(|l| l.date).collect();
        assert_eq!(dates, vec![date(9), date(2), date(5)]);
        assert_eq!(result.total_billable_hours, dec("21"));
    }

    #[test]
    fn test_total_sums_mixed_rules() {
        let entries = vec![
            entry_with_break(5, "9", "30", "8"),
            entry_with_break(6, "7", "30", "8"),
            AttendanceEntry {
                payment_hours: dec("8"),
                ..entry(7, "8.25")
            },
        ];
        let result = aggregate_attendance(&entries, &HashSet::new(), 1).unwrap();
        assert_eq!(result.total_billable_hours, dec("23.5"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_negative_billable_clamped_with_warning() {
        let entries = vec![entry_with_break(5, "1", "90", "0.5")];
        let result = aggregate_attendance(&entries, &HashSet::new(), 1).unwrap();

        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].billable_hours, Decimal::ZERO);
        assert_eq!(result.total_billable_hours, Decimal::ZERO);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, "NEGATIVE_BILLABLE_HOURS");
    }

    #[test]
    fn test_audit_step_content() {
        let entries = vec![entry_with_break(5, "9", "30", "8")];
        let result = aggregate_attendance(&entries, &HashSet::new(), 3).unwrap();

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "attendance_aggregation");
        assert_eq!(result.audit_step.input["entries"], 1);
        assert_eq!(
            result.audit_step.output["total_billable_hours"].as_str().unwrap(),
            "8.5"
        );
        assert!(result.audit_step.reasoning.contains("1 of 1"));
    }

    #[test]
    fn test_empty_register() {
        let result = aggregate_attendance(&[], &HashSet::new(), 1).unwrap();
        assert!(result.lines.is_empty());
        assert_eq!(result.total_billable_hours, Decimal::ZERO);
    }

    #[test]
    fn test_total_overflow_is_invalid_input() {
        let huge = AttendanceEntry {
            payment_hours: Decimal::MAX,
            ..entry(5, "8")
        };
        let entries = vec![huge.clone(), AttendanceEntry { date: date(6), ..huge }];

        let error = aggregate_attendance(&entries, &HashSet::new(), 1).unwrap_err();
        assert!(matches!(error, ReconcileError::InvalidInput { .. }));
    }

    #[test]
    fn test_break_deduction_overflow_is_invalid_input() {
        let e = AttendanceEntry {
            working_hours: Decimal::MAX,
            unpaid_break_minutes: Decimal::MIN,
            ..entry_with_break(5, "9", "30", "8")
        };
        assert!(matches!(
            billable_hours(&e),
            Err(ReconcileError::InvalidInput { .. })
        ));
    }
}
