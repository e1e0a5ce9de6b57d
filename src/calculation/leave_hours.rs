//! Leave-hour calculation functionality.
//!
//! This module converts approved leave in a pay period into the number of
//! hours to deduct from regular working hours, using the length of the
//! employee's assigned shift as the value of one leave day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::ReconcileResult;
use crate::models::{AuditStep, AuditWarning, LeaveApplication, ShiftDefinition};

use super::hour_overflow;

/// The result of calculating leave hours for a pay period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveHoursCalculation {
    /// Length of one shift in hours.
    pub shift_hours: Decimal,
    /// Total hours of leave to deduct.
    pub leave_hours: Decimal,
    /// Full leave days falling inside the period.
    pub full_days: i64,
    /// Number of half-day applications counted.
    pub half_days: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Warnings about the shift definition.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates the leave hours to deduct for a pay period.
///
/// For each approved application overlapping `[period_start, period_end]`:
/// - a half-day application adds half a shift, however many days it spans;
/// - any other application adds one shift per day of the clipped overlap.
///
/// Applications that are not approved or do not overlap the period add nothing.
/// Fails with [`InvalidInput`] if the leave total overflows.
///
/// [`InvalidInput`]: crate::error::ReconcileError::InvalidInput
///
/// # Arguments
///
/// * `shift` - The shift assigned to the employee for the period
/// * `applications` - Leave applications for the employee
/// * `period_start` - First day of the pay period (inclusive)
/// * `period_end` - Last day of the pay period (inclusive)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use hour_reconciler::calculation::calculate_leave_hours;
/// use hour_reconciler::models::{LeaveApplication, LeaveStatus, ShiftDefinition};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftDefinition {
///     name: "Day".to_string(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// };
/// let half_day = LeaveApplication {
///     from_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     half_day: true,
///     status: LeaveStatus::Approved,
/// };
///
/// let result = calculate_leave_hours(
///     &shift,
///     &[half_day],
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     1,
/// )?;
/// assert_eq!(result.leave_hours, Decimal::from(4));
/// # Ok::<(), hour_reconciler::error::ReconcileError>(())
/// ```
pub fn calculate_leave_hours(
    shift: &ShiftDefinition,
    applications: &[LeaveApplication],
    period_start: NaiveDate,
    period_end: NaiveDate,
    step_number: u32,
) -> ReconcileResult<LeaveHoursCalculation> {
    let shift_hours = shift.shift_hours();
    let mut warnings = Vec::new();

    if shift_hours.is_zero() {
        warn!(shift = %shift.name, "Shift starts and ends at the same time, leave is worth 0 hours");
        warnings.push(AuditWarning {
            code: "ZERO_LENGTH_SHIFT".to_string(),
            message: format!(
                "Shift '{}' starts and ends at {}; leave days are worth 0 hours",
                shift.name, shift.start_time
            ),
            severity: "high".to_string(),
        });
    }

    let half_shift = shift_hours / Decimal::TWO;
    let mut leave_hours = Decimal::ZERO;
    let mut full_days = 0i64;
    let mut half_days = 0usize;

    for application in applications
        .iter()
        .filter(|a| a.is_approved() && a.overlaps(period_start, period_end))
    {
        if application.half_day {
            half_days += 1;
            leave_hours = leave_hours
                .checked_add(half_shift)
                .ok_or_else(|| hour_overflow("Leave total"))?;
        } else {
            let days = application.overlap_days(period_start, period_end);
            full_days += days;
            leave_hours = Decimal::from(days)
                .checked_mul(shift_hours)
                .and_then(|hours| leave_hours.checked_add(hours))
                .ok_or_else(|| hour_overflow("Leave total"))?;
        }
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_hours".to_string(),
        rule_name: "Leave Hours Deduction".to_string(),
        input: serde_json::json!({
            "shift": shift.name,
            "shift_start": shift.start_time.to_string(),
            "shift_end": shift.end_time.to_string(),
            "crosses_midnight": shift.crosses_midnight(),
            "applications": applications.len(),
            "period_start": period_start.to_string(),
            "period_end": period_end.to_string()
        }),
        output: serde_json::json!({
            "shift_hours": shift_hours.normalize().to_string(),
            "full_days": full_days,
            "half_days": half_days,
            "leave_hours": leave_hours.normalize().to_string()
        }),
        reasoning: format!(
            "{} full leave days and {} half days at {} hours per shift deduct {} hours",
            full_days,
            half_days,
            shift_hours.normalize(),
            leave_hours.normalize()
        ),
    };

    Ok(LeaveHoursCalculation {
        shift_hours,
        leave_hours,
        full_days,
        half_days,
        audit_step,
        warnings,
    })
}
