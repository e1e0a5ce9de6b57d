//! Hour reconciliation calculations.
//!
//! This module provides the four calculations run for every pay period:
//!
//! - [`aggregate_attendance`]: billable hours from the attendance register
//! - [`classify_overtime`]: regular and holiday overtime buckets
//! - [`calculate_leave_hours`]: leave hours to deduct, valued at one shift per day
//! - [`rebalance_to_cap`]: regular hours capped at the monthly maximum

mod attendance;
mod cap_rebalance;
mod leave_hours;
mod overtime;

pub use attendance::{aggregate_attendance, billable_hours, AttendanceAggregation};
pub use cap_rebalance::{rebalance_to_cap, CapAdjustment, CapRebalance};
pub use leave_hours::{calculate_leave_hours, LeaveHoursCalculation};
pub use overtime::{classify_overtime, OvertimeClassification};

use crate::error::ReconcileError;

/// The error returned when an hour total leaves the range `Decimal` can hold.
pub(crate) fn hour_overflow(what: &str) -> ReconcileError {
    ReconcileError::InvalidInput {
        message: format!("{} is outside the supported range of hours", what),
    }
}
