//! Attendance models.
//!
//! This module defines the [`AttendanceEntry`] read from the attendance register
//! and the [`AttendanceLine`] written to a reconciled pay period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of clocked attendance for an employee.
///
/// # Example
///
/// ```
/// use hour_reconciler::models::AttendanceEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entry = AttendanceEntry {
///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     working_hours: Decimal::from_str("9").unwrap(),
///     include_unpaid_breaks: true,
///     unpaid_break_minutes: Decimal::from_str("30").unwrap(),
///     min_hours_to_include_break: Decimal::from_str("8").unwrap(),
///     payment_hours: Decimal::from_str("9").unwrap(),
/// };
/// assert!(entry.working_hours > Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The attendance date.
    pub date: NaiveDate,
    /// Hours between check-in and check-out.
    pub working_hours: Decimal,
    /// Whether unpaid breaks are deducted for this day.
    #[serde(default)]
    pub include_unpaid_breaks: bool,
    /// Length of the unpaid break in minutes.
    #[serde(default)]
    pub unpaid_break_minutes: Decimal,
    /// The break is only deducted when more than this many hours were worked.
    #[serde(default)]
    pub min_hours_to_include_break: Decimal,
    /// Hours to pay when breaks are not being deducted.
    #[serde(default)]
    pub payment_hours: Decimal,
}

/// An attendance day carried onto a reconciled pay period.
///
/// Holds the source fields of the [`AttendanceEntry`] it came from together
/// with the billable hours derived for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceLine {
    /// The attendance date.
    pub date: NaiveDate,
    /// Hours worked as recorded on the attendance entry.
    pub hours_worked: Decimal,
    /// Whether unpaid breaks were deducted.
    pub include_unpaid_breaks: bool,
    /// Length of the unpaid break in minutes.
    pub unpaid_break_minutes: Decimal,
    /// Threshold above which the break was deducted.
    pub min_hours_to_include_break: Decimal,
    /// Hours counted toward regular pay.
    pub billable_hours: Decimal,
}

impl AttendanceLine {
    /// Builds a line from its source entry and computed billable hours.
    pub fn from_entry(entry: &AttendanceEntry, billable_hours: Decimal) -> Self {
        Self {
            date: entry.date,
            hours_worked: entry.working_hours,
            include_unpaid_breaks: entry.include_unpaid_breaks,
            unpaid_break_minutes: entry.unpaid_break_minutes,
            min_hours_to_include_break: entry.min_hours_to_include_break,
            billable_hours,
        }
    }
}
