//! Batch run reporting.

use uuid::Uuid;

use crate::error::ReconcileError;

/// A pay period that could not be reconciled.
#[derive(Debug)]
pub struct PeriodFailure {
    /// The pay period record that failed.
    pub period_id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// Why it failed.
    pub error: ReconcileError,
}

/// Summary of a batch run over several pay periods.
#[derive(Debug)]
pub struct BatchReport {
    /// Correlation id for the run, attached to every log line it emits.
    pub run_id: Uuid,
    /// Periods whose results were written, in processing order.
    pub persisted: Vec<String>,
    /// Periods with nothing to write.
    pub skipped: Vec<String>,
    /// Periods that failed; the rest of the batch still ran.
    pub failures: Vec<PeriodFailure>,
}

impl BatchReport {
    pub(crate) fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            persisted: Vec::new(),
            skipped: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Returns `true` if no period failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of periods processed.
    pub fn processed(&self) -> usize {
        self.persisted.len() + self.skipped.len() + self.failures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_report_counts() {
        let mut report = BatchReport::new(Uuid::new_v4());
        assert!(report.is_success());
        assert_eq!(report.processed(), 0);

        report.persisted.push("PP-1".to_string());
        report.skipped.push("PP-2".to_string());
        report.failures.push(PeriodFailure {
            period_id: "PP-3".to_string(),
            employee_id: "EMP-0003".to_string(),
            error: ReconcileError::NoShiftAssignment {
                employee_id: "EMP-0003".to_string(),
                start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            },
        });

        assert!(!report.is_success());
        assert_eq!(report.processed(), 3);
    }
}
