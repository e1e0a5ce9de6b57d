//! Shift definition and assignment models.
//!
//! This module defines the [`ShiftDefinition`] describing an employee's daily
//! working window, and the [`ShiftAssignment`] that ties a shift to a date range.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;

/// A named daily working window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// Name of the shift type (e.g. "Day Shift").
    #[serde(default)]
    pub name: String,
    /// Wall-clock start of the shift.
    pub start_time: NaiveTime,
    /// Wall-clock end of the shift.
    pub end_time: NaiveTime,
}

impl ShiftDefinition {
    /// Calculates the length of one shift in hours.
    ///
    /// Start and end are wall-clock times of day. When the end is earlier
    /// than the start the shift runs past midnight and the length wraps by
    /// one day. Equal times produce a zero-length shift.
    ///
    /// # Example
    ///
    /// ```
    /// use hour_reconciler::models::ShiftDefinition;
    /// use chrono::NaiveTime;
    /// use rust_decimal::Decimal;
    ///
    /// let night = ShiftDefinition {
    ///     name: "Night".to_string(),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    /// };
    /// assert_eq!(night.shift_hours(), Decimal::from(8));
    /// ```
    pub fn shift_hours(&self) -> Decimal {
        let mut seconds = self
            .end_time
            .signed_duration_since(self.start_time)
            .num_seconds();
        if seconds < 0 {
            seconds += SECONDS_PER_DAY;
        }
        Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
    }

    /// Returns `true` if the shift ends on the calendar day after it starts.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time < self.start_time
    }
}

/// Assignment of a shift to an employee over a date range.
///
/// An assignment without an end date stays in force indefinitely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// The assigned shift.
    pub shift: ShiftDefinition,
    /// First day the assignment applies.
    pub start_date: NaiveDate,
    /// Last day the assignment applies, if bounded.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl ShiftAssignment {
    /// Returns `true` if the assignment is in force on any day of `[start, end]`.
    pub fn covers(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date.is_none_or(|last| last >= start)
    }
}
