//! Collaborator interfaces for reading source records and writing results.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::ReconcileResult;
use crate::models::{
    AttendanceEntry, LeaveApplication, OvertimeEntry, PayPeriodRecord,
    PeriodReconciliationResult, ShiftDefinition,
};

/// Read access to the records a reconciliation needs.
///
/// Each method is called at most once per pay period. Implementations are
/// responsible for scoping records to the employee and date range asked for.
pub trait PayrollDataSource {
    /// Attendance entries for the employee dated within `[start, end]`.
    fn fetch_attendance(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReconcileResult<Vec<AttendanceEntry>>;

    /// Overtime timesheet entries for the employee dated within `[start, end]`.
    fn fetch_overtime_attendance(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReconcileResult<Vec<OvertimeEntry>>;

    /// The employee's holiday dates, or `None` if no holiday list is assigned.
    fn fetch_holiday_dates(&self, employee_id: &str) -> ReconcileResult<Option<HashSet<NaiveDate>>>;

    /// The shift assigned to the employee for the period.
    ///
    /// Fails with [`ReconcileError::NoShiftAssignment`] when no assignment
    /// covers the period.
    ///
    /// [`ReconcileError::NoShiftAssignment`]: crate::error::ReconcileError::NoShiftAssignment
    fn fetch_active_shift_assignment(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReconcileResult<ShiftDefinition>;

    /// Approved leave applications overlapping `[start, end]`.
    fn fetch_approved_leave_applications(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReconcileResult<Vec<LeaveApplication>>;
}

/// Write access to pay period records.
pub trait ResultStore {
    /// Writes the reconciled result onto the pay period record.
    ///
    /// A write either fully succeeds or leaves the record untouched.
    fn persist(
        &mut self,
        period: &PayPeriodRecord,
        result: &PeriodReconciliationResult,
    ) -> ReconcileResult<()>;
}
