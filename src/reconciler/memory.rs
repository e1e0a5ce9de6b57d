//! In-memory collaborators.
//!
//! [`InMemoryDataSource`] answers the data-source queries from records held per
//! employee, applying the same date scoping a payroll database query would.
//! [`InMemoryStore`] keeps the last result written for each pay period.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ReconcileError, ReconcileResult};
use crate::models::{
    AttendanceEntry, LeaveApplication, OvertimeEntry, PayPeriodRecord,
    PeriodReconciliationResult, ShiftAssignment, ShiftDefinition,
};

use super::data_source::{PayrollDataSource, ResultStore};

/// All source records held for one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecords {
    /// Attendance register entries.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
    /// Overtime timesheet entries.
    #[serde(default)]
    pub overtime: Vec<OvertimeEntry>,
    /// Holiday list dates; `None` when no holiday list is assigned.
    #[serde(default)]
    pub holiday_dates: Option<Vec<NaiveDate>>,
    /// Shift assignments, in priority order.
    #[serde(default)]
    pub shift_assignments: Vec<ShiftAssignment>,
    /// Leave applications in any status.
    #[serde(default)]
    pub leave_applications: Vec<LeaveApplication>,
}

/// A [`PayrollDataSource`] backed by per-employee records.
///
/// # Example
///
/// ```
/// use hour_reconciler::reconciler::{EmployeeRecords, InMemoryDataSource, PayrollDataSource};
/// use chrono::NaiveDate;
///
/// let source = InMemoryDataSource::new().with_employee("EMP-0001", EmployeeRecords::default());
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
///
/// assert!(source.fetch_attendance("EMP-0001", start, end).unwrap().is_empty());
/// assert!(source.fetch_active_shift_assignment("EMP-0001", start, end).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    employees: HashMap<String, EmployeeRecords>,
}

impl InMemoryDataSource {
    /// Creates an empty data source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee's records, returning the data source.
    pub fn with_employee(mut self, employee_id: impl Into<String>, records: EmployeeRecords) -> Self {
        self.insert(employee_id, records);
        self
    }

    /// Adds or replaces an employee's records.
    pub fn insert(&mut self, employee_id: impl Into<String>, records: EmployeeRecords) {
        self.employees.insert(employee_id.into(), records);
    }

    fn records(&self, employee_id: &str) -> Option<&EmployeeRecords> {
        self.employees.get(employee_id)
    }
}

/// Inclusive at both ends.
fn within(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    date >= start && date <= end
}

impl From<HashMap<String, EmployeeRecords>> for InMemoryDataSource {
    fn from(employees: HashMap<String, EmployeeRecords>) -> Self {
        Self { employees }
    }
}

impl PayrollDataSource for InMemoryDataSource {
    fn fetch_attendance(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReconcileResult<Vec<AttendanceEntry>> {
        Ok(self
            .records(employee_id)
            .map(|r| {
                r.attendance
                    .iter()
                    .filter(|a| within(a.date, start, end))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn fetch_overtime_attendance(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReconcileResult<Vec<OvertimeEntry>> {
        Ok(self
            .records(employee_id)
            .map(|r| {
                r.overtime
                    .iter()
                    .filter(|o| within(o.date, start, end))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn fetch_holiday_dates(&self, employee_id: &str) -> ReconcileResult<Option<HashSet<NaiveDate>>> {
        Ok(self
            .records(employee_id)
            .and_then(|r| r.holiday_dates.as_ref())
            .map(|dates| dates.iter().copied().collect()))
    }

    fn fetch_active_shift_assignment(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReconcileResult<ShiftDefinition> {
        self.records(employee_id)
            .and_then(|r| r.shift_assignments.iter().find(|a| a.covers(start, end)))
            .map(|a| a.shift.clone())
            .ok_or_else(|| ReconcileError::NoShiftAssignment {
                employee_id: employee_id.to_string(),
                start_date: start,
                end_date: end,
            })
    }

    fn fetch_approved_leave_applications(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReconcileResult<Vec<LeaveApplication>> {
        Ok(self
            .records(employee_id)
            .map(|r| {
                r.leave_applications
                    .iter()
                    .filter(|l| l.is_approved() && l.overlaps(start, end))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// A [`ResultStore`] holding the last result written per pay period.
///
/// Writes are last-writer-wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    results: HashMap<String, PeriodReconciliationResult>,
    writes: usize,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The result currently stored for `period_id`.
    pub fn get(&self, period_id: &str) -> Option<&PeriodReconciliationResult> {
        self.results.get(period_id)
    }

    /// Number of pay periods with a stored result.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Total number of successful writes, including overwrites.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Consumes the store, returning the stored results keyed by period id.
    pub fn into_results(self) -> HashMap<String, PeriodReconciliationResult> {
        self.results
    }
}

impl ResultStore for InMemoryStore {
    fn persist(
        &mut self,
        period: &PayPeriodRecord,
        result: &PeriodReconciliationResult,
    ) -> ReconcileResult<()> {
        self.results.insert(period.id.clone(), result.clone());
        self.writes += 1;
        Ok(())
    }
}
