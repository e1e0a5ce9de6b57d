//! Core data models for the hour reconciler.
//!
//! This module contains all the domain models used throughout the crate.

mod attendance;
mod leave;
mod overtime;
mod pay_period;
mod reconciliation_result;
mod shift;

pub use attendance::{AttendanceEntry, AttendanceLine};
pub use leave::{LeaveApplication, LeaveStatus};
pub use overtime::{OvertimeEntry, OvertimeLine};
pub use pay_period::PayPeriodRecord;
pub use reconciliation_result::{AuditStep, AuditTrace, AuditWarning, PeriodReconciliationResult};
pub use shift::{ShiftAssignment, ShiftDefinition};
