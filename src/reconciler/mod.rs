//! Pay period orchestration.
//!
//! The [`HourReconciler`] runs the calculations for a pay period in order,
//! assembles a [`PeriodReconciliationResult`] and hands it to a [`ResultStore`].
//! Source records come from a [`PayrollDataSource`].

mod batch;
mod data_source;
mod memory;

pub use batch::{BatchReport, PeriodFailure};
pub use data_source::{PayrollDataSource, ResultStore};
pub use memory::{EmployeeRecords, InMemoryDataSource, InMemoryStore};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate_attendance, calculate_leave_hours, classify_overtime, hour_overflow,
    rebalance_to_cap,
};
use crate::config::ReconciliationConfig;
use crate::error::ReconcileResult;
use crate::models::{PayPeriodRecord, PeriodReconciliationResult};

/// What happened to a reconciled pay period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodOutcome {
    /// The result was written to the pay period record.
    Persisted(PeriodReconciliationResult),
    /// The period had no attendance or overtime lines; the record was left untouched.
    Skipped(PeriodReconciliationResult),
}

impl PeriodOutcome {
    /// The computed result, whether or not it was written.
    pub fn result(&self) -> &PeriodReconciliationResult {
        match self {
            PeriodOutcome::Persisted(result) | PeriodOutcome::Skipped(result) => result,
        }
    }

    /// Returns `true` if the result was written.
    pub fn is_persisted(&self) -> bool {
        matches!(self, PeriodOutcome::Persisted(_))
    }
}

/// Reconciles working hours for pay period records.
///
/// # Example
///
/// ```
/// use hour_reconciler::config::ReconciliationConfig;
/// use hour_reconciler::models::PayPeriodRecord;
/// use hour_reconciler::reconciler::{
///     EmployeeRecords, HourReconciler, InMemoryDataSource, InMemoryStore,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = ReconciliationConfig::new(Decimal::from(208), "Overtime 1.5", "Overtime 2.0")?;
/// let source = InMemoryDataSource::new().with_employee("EMP-0001", EmployeeRecords::default());
/// let mut reconciler = HourReconciler::new(config, source, InMemoryStore::new());
///
/// let period = PayPeriodRecord {
///     id: "PP-2026-01".to_string(),
///     employee_id: "EMP-0001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
///
/// // No shift is assigned, so the period cannot be reconciled.
/// assert!(reconciler.reconcile_period(&period).is_err());
/// assert!(reconciler.store().is_empty());
/// # Ok::<(), hour_reconciler::error::ReconcileError>(())
/// ```
#[derive(Debug)]
pub struct HourReconciler<D, S> {
    config: ReconciliationConfig,
    source: D,
    store: S,
}

impl<D, S> HourReconciler<D, S> {
    /// Creates a reconciler over the given collaborators.
    ///
    /// The configuration has already been validated, so a run never starts
    /// with a bad cap or colliding overtime tags.
    pub fn new(config: ReconciliationConfig, source: D, store: S) -> Self {
        Self {
            config,
            source,
            store,
        }
    }

    /// The configuration this reconciler runs with.
    pub fn config(&self) -> &ReconciliationConfig {
        &self.config
    }

    /// The result store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the reconciler, returning the result store.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<D: PayrollDataSource, S> HourReconciler<D, S> {
    /// Computes the reconciled hours for a pay period without writing them.
    ///
    /// # Errors
    ///
    /// - [`NoShiftAssignment`] if no shift covers the period
    /// - [`InvalidInput`] if an hour total overflows
    /// - any error raised by the data source
    ///
    /// [`NoShiftAssignment`]: crate::error::ReconcileError::NoShiftAssignment
    /// [`InvalidInput`]: crate::error::ReconcileError::InvalidInput
    pub fn compute_period(
        &self,
        period: &PayPeriodRecord,
    ) -> ReconcileResult<PeriodReconciliationResult> {
        let employee = period.employee_id.as_str();
        let (start, end) = (period.start_date, period.end_date);
        let mut result = PeriodReconciliationResult::empty(period);
        let mut step_number: u32 = 1;

        let attendance = self.source.fetch_attendance(employee, start, end)?;
        let overtime = self.source.fetch_overtime_attendance(employee, start, end)?;
        let holiday_dates = self
            .source
            .fetch_holiday_dates(employee)?
            .unwrap_or_default();

        // Step 1: billable attendance
        let aggregation = aggregate_attendance(&attendance, &holiday_dates, step_number)?;
        step_number += 1;
        result.attendance_lines = aggregation.lines;
        result.regular_working_hours = aggregation.total_billable_hours;
        result.audit_trace.steps.push(aggregation.audit_step);
        result.audit_trace.warnings.extend(aggregation.warnings);

        // Step 2: overtime buckets
        let classification = classify_overtime(
            &overtime,
            self.config.regular_overtime_activity(),
            self.config.holiday_overtime_activity(),
            step_number,
        )?;
        step_number += 1;
        result.regular_overtime_lines = classification.regular_lines;
        result.holiday_overtime_lines = classification.holiday_lines;
        result.overtime_hours = classification.regular_total;
        result.holiday_hours = classification.holiday_total;
        result.audit_trace.steps.push(classification.audit_step);

        // Step 3: leave deduction, allowed to drive regular hours negative
        let shift = self
            .source
            .fetch_active_shift_assignment(employee, start, end)?;
        let leave = self
            .source
            .fetch_approved_leave_applications(employee, start, end)?;
        let leave_hours = calculate_leave_hours(&shift, &leave, start, end, step_number)?;
        step_number += 1;
        result.regular_working_hours = result
            .regular_working_hours
            .checked_sub(leave_hours.leave_hours)
            .ok_or_else(|| hour_overflow("Regular hours after leave"))?;
        result.audit_trace.steps.push(leave_hours.audit_step);
        result.audit_trace.warnings.extend(leave_hours.warnings);

        // Step 4: monthly cap
        let rebalance = rebalance_to_cap(
            result.regular_working_hours,
            result.overtime_hours,
            self.config.maximum_monthly_hours(),
            step_number,
        )?;
        result.regular_working_hours = rebalance.regular_hours;
        result.overtime_hours = rebalance.overtime_hours;
        result.audit_trace.steps.push(rebalance.audit_step);

        debug_assert!(result.regular_working_hours <= self.config.maximum_monthly_hours());

        debug!(
            period_id = %period.id,
            employee_id = %employee,
            attendance_lines = result.attendance_lines.len(),
            leave_hours = %leave_hours.leave_hours,
            adjustment = ?rebalance.adjustment,
            "Computed pay period hours"
        );

        Ok(result)
    }
}

impl<D: PayrollDataSource, S: ResultStore> HourReconciler<D, S> {
    /// Reconciles a pay period and writes the result if it has any lines.
    ///
    /// A period without attendance or overtime lines is not written, leaving
    /// whatever the record held before untouched.
    pub fn reconcile_period(&mut self, period: &PayPeriodRecord) -> ReconcileResult<PeriodOutcome> {
        let result = self.compute_period(period)?;

        if !result.has_lines() {
            info!(
                period_id = %period.id,
                employee_id = %period.employee_id,
                "No attendance or overtime in period, leaving record untouched"
            );
            return Ok(PeriodOutcome::Skipped(result));
        }

        self.store.persist(period, &result)?;
        info!(
            period_id = %period.id,
            employee_id = %period.employee_id,
            regular_working_hours = %result.regular_working_hours,
            overtime_hours = %result.overtime_hours,
            holiday_hours = %result.holiday_hours,
            "Pay period reconciled"
        );
        Ok(PeriodOutcome::Persisted(result))
    }

    /// Reconciles each pay period in order.
    ///
    /// A failing period is recorded in the report and the run moves on to the
    /// next one; no period is retried.
    pub fn reconcile_batch(&mut self, periods: &[PayPeriodRecord]) -> BatchReport {
        let mut report = BatchReport::new(Uuid::new_v4());
        info!(run_id = %report.run_id, periods = periods.len(), "Starting reconciliation run");

        for period in periods {
            match self.reconcile_period(period) {
                Ok(PeriodOutcome::Persisted(_)) => report.persisted.push(period.id.clone()),
                Ok(PeriodOutcome::Skipped(_)) => report.skipped.push(period.id.clone()),
                Err(error) => {
                    warn!(
                        run_id = %report.run_id,
                        period_id = %period.id,
                        employee_id = %period.employee_id,
                        error = %error,
                        "Pay period reconciliation failed"
                    );
                    report.failures.push(PeriodFailure {
                        period_id: period.id.clone(),
                        employee_id: period.employee_id.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            run_id = %report.run_id,
            processed = report.processed(),
            persisted = report.persisted.len(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "Reconciliation run finished"
        );
        report
    }
}
