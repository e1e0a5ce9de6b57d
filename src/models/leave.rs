//! Leave application models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workflow status of a leave application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted, awaiting a decision.
    Open,
    /// Approved by the leave approver.
    #[default]
    Approved,
    /// Rejected by the leave approver.
    Rejected,
    /// Withdrawn after submission.
    Cancelled,
}

/// An employee's request for time off over an inclusive date range.
///
/// # Example
///
/// ```
/// use hour_reconciler::models::{LeaveApplication, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = LeaveApplication {
///     from_date: NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
///     half_day: false,
///     status: LeaveStatus::Approved,
/// };
///
/// // Only the days falling inside January count toward a January period.
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// assert_eq!(leave.overlap_days(start, end), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// First day of leave (inclusive).
    pub from_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub to_date: NaiveDate,
    /// Whether this is a half-day leave.
    #[serde(default)]
    pub half_day: bool,
    /// Workflow status; records without one are treated as approved.
    #[serde(default)]
    pub status: LeaveStatus,
}

impl LeaveApplication {
    /// Returns `true` if any day of the leave falls in `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.from_date <= end && self.to_date >= start
    }

    /// Number of leave days inside `[start, end]`, both ends inclusive.
    ///
    /// Returns zero when the leave does not overlap the range.
    pub fn overlap_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        if !self.overlaps(start, end) {
            return 0;
        }
        let clipped_end = self.to_date.min(end);
        let clipped_start = self.from_date.max(start);
        (clipped_end - clipped_start).num_days() + 1
    }

    /// Returns `true` if the application has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn leave(from: NaiveDate, to: NaiveDate) -> LeaveApplication {
        LeaveApplication {
            from_date: from,
            to_date: to,
            half_day: false,
            status: LeaveStatus::Approved,
        }
    }

    #[test]
    fn test_overlap_days_fully_inside_period() {
        let l = leave(date(2026, 1, 12), date(2026, 1, 14));
        assert_eq!(l.overlap_days(date(2026, 1, 1), date(2026, 1, 31)), 3);
    }

    #[test]
    fn test_overlap_days_single_day() {
        let l = leave(date(2026, 1, 12), date(2026, 1, 12));
        assert_eq!(l.overlap_days(date(2026, 1, 1), date(2026, 1, 31)), 1);
    }

    #[test]
    fn test_overlap_days_clipped_at_period_start() {
        let l = leave(date(2025, 12, 29), date(2026, 1, 2));
        assert_eq!(l.overlap_days(date(2026, 1, 1), date(2026, 1, 31)), 2);
    }

    #[test]
    fn test_overlap_days_spanning_whole_period() {
        let l = leave(date(2025, 12, 1), date(2026, 3, 1));
        assert_eq!(l.overlap_days(date(2026, 2, 1), date(2026, 2, 28)), 28);
    }

    #[test]
    fn test_overlap_days_outside_period_is_zero() {
        let l = leave(date(2026, 2, 2), date(2026, 2, 4));
        assert!(!l.overlaps(date(2026, 1, 1), date(2026, 1, 31)));
        assert_eq!(l.overlap_days(date(2026, 1, 1), date(2026, 1, 31)), 0);
    }

    #[test]
    fn test_status_defaults_to_approved() {
        let json = r#"{"from_date": "2026-01-05", "to_date": "2026-01-05"}"#;
        let l: LeaveApplication = serde_json::from_str(json).unwrap();
        assert!(l.is_approved());
        assert!(!l.half_day);
    }

    #[test]
    fn test_status_deserializes_snake_case() {
        let json = r#"{"from_date": "2026-01-05", "to_date": "2026-01-06", "status": "rejected"}"#;
        let l: LeaveApplication = serde_json::from_str(json).unwrap();
        assert_eq!(l.status, LeaveStatus::Rejected);
        assert!(!l.is_approved());
    }
}
