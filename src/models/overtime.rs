//! Overtime timesheet models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A timesheet record logged against an overtime activity type.
///
/// # Example
///
/// ```
/// use hour_reconciler::models::OvertimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = OvertimeEntry {
///     source_id: "TS-2026-00017".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     activity_type: "Overtime 1.5".to_string(),
///     total_hours: Decimal::from(3),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeEntry {
    /// Identifier of the timesheet this entry was taken from.
    pub source_id: String,
    /// The day the overtime was logged.
    pub date: NaiveDate,
    /// Activity type used to pick the overtime bucket.
    pub activity_type: String,
    /// Hours logged on the timesheet.
    pub total_hours: Decimal,
}

/// A timesheet's contribution to one of the overtime buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeLine {
    /// Identifier of the source timesheet.
    pub source_id: String,
    /// Hours taken from the timesheet.
    pub hours: Decimal,
}

impl From<&OvertimeEntry> for OvertimeLine {
    fn from(entry: &OvertimeEntry) -> Self {
        Self {
            source_id: entry.source_id.clone(),
            hours: entry.total_hours,
        }
    }
}
