//! Pay period record model.
//!
//! This module contains the [`PayPeriodRecord`] type identifying the draft
//! payroll record that a reconciliation result is written to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A draft payroll record for one employee over one pay period.
///
/// # Example
///
/// ```
/// use hour_reconciler::models::PayPeriodRecord;
/// use chrono::NaiveDate;
///
/// let period = PayPeriodRecord {
///     id: "Sal Slip/EMP-0001/00001".to_string(),
///     employee_id: "EMP-0001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
/// assert_eq!(period.employee_id, "EMP-0001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodRecord {
    /// Identifier of the payroll record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}
