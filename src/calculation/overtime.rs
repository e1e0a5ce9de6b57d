//! Overtime classification functionality.
//!
//! Splits overtime timesheet entries into the regular and holiday buckets by
//! their activity type.

use rust_decimal::Decimal;

use crate::error::ReconcileResult;
use crate::models::{AuditStep, OvertimeEntry, OvertimeLine};

use super::hour_overflow;

/// The two overtime buckets for a pay period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvertimeClassification {
    /// Entries tagged with the regular overtime activity, in input order.
    pub regular_lines: Vec<OvertimeLine>,
    /// Sum of hours in `regular_lines`.
    pub regular_total: Decimal,
    /// Entries tagged with the holiday overtime activity, in input order.
    pub holiday_lines: Vec<OvertimeLine>,
    /// Sum of hours in `holiday_lines`.
    pub holiday_total: Decimal,
    /// Entries matching neither activity type.
    pub ignored_count: usize,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Classifies overtime entries by activity type.
///
/// Entries whose activity type matches neither tag are ignored. The two tags
/// are expected to differ; configuration validation rejects equal tags.
/// Fails with [`InvalidInput`] if a bucket total overflows.
///
/// [`InvalidInput`]: crate::error::ReconcileError::InvalidInput
///
/// # Example
///
/// ```
/// use hour_reconciler::calculation::classify_overtime;
/// use hour_reconciler::models::OvertimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = |id: &str, tag: &str, hours: i64| OvertimeEntry {
///     source_id: id.to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
///     activity_type: tag.to_string(),
///     total_hours: Decimal::from(hours),
/// };
/// let entries = vec![
///     entry("TS-1", "Overtime 1.5", 3),
///     entry("TS-2", "Overtime 2.0", 5),
///     entry("TS-3", "Training", 2),
/// ];
///
/// let result = classify_overtime(&entries, "Overtime 1.5", "Overtime 2.0", 1)?;
/// assert_eq!(result.regular_total, Decimal::from(3));
/// assert_eq!(result.holiday_total, Decimal::from(5));
/// assert_eq!(result.ignored_count, 1);
/// # Ok::<(), hour_reconciler::error::ReconcileError>(())
/// ```
pub fn classify_overtime(
    entries: &[OvertimeEntry],
    regular_activity: &str,
    holiday_activity: &str,
    step_number: u32,
) -> ReconcileResult<OvertimeClassification> {
    let mut regular_lines = Vec::new();
    let mut holiday_lines = Vec::new();
    let mut regular_total = Decimal::ZERO;
    let mut holiday_total = Decimal::ZERO;
    let mut ignored_count = 0;

    for entry in entries {
        if entry.activity_type == regular_activity {
            regular_lines.push(OvertimeLine::from(entry));
            regular_total = regular_total
                .checked_add(entry.total_hours)
                .ok_or_else(|| hour_overflow("Regular overtime total"))?;
        } else if entry.activity_type == holiday_activity {
            holiday_lines.push(OvertimeLine::from(entry));
            holiday_total = holiday_total
                .checked_add(entry.total_hours)
                .ok_or_else(|| hour_overflow("Holiday overtime total"))?;
        } else {
            ignored_count += 1;
        }
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_classification".to_string(),
        rule_name: "Overtime Classification".to_string(),
        input: serde_json::json!({
            "entries": entries.len(),
            "regular_activity": regular_activity,
            "holiday_activity": holiday_activity
        }),
        output: serde_json::json!({
            "regular_entries": regular_lines.len(),
            "regular_hours": regular_total.normalize().to_string(),
            "holiday_entries": holiday_lines.len(),
            "holiday_hours": holiday_total.normalize().to_string(),
            "ignored_entries": ignored_count
        }),
        reasoning: format!(
            "{} hours of '{}' counted as regular overtime and {} hours of '{}' as holiday overtime",
            regular_total.normalize(),
            regular_activity,
            holiday_total.normalize(),
            holiday_activity
        ),
    };

    Ok(OvertimeClassification {
        regular_lines,
        regular_total,
        holiday_lines,
        holiday_total,
        ignored_count,
        audit_step,
    })
}
