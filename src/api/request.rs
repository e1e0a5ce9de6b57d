//! Request types for the reconciliation API.
//!
//! Requests carry every source record the reconciliation needs, so the API can
//! run without a database behind it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::PayPeriodRecord;
use crate::reconciler::EmployeeRecords;

/// Request body for `POST /reconcile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// The pay period to reconcile.
    pub period: PayPeriodRecord,
    /// Source records for the period's employee.
    #[serde(default)]
    pub records: EmployeeRecords,
}

/// Request body for `POST /reconcile/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReconcileRequest {
    /// Pay periods to reconcile, in processing order.
    pub periods: Vec<PayPeriodRecord>,
    /// Source records keyed by employee id.
    #[serde(default)]
    pub employees: HashMap<String, EmployeeRecords>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_reconcile_request() {
        let json = r#"{
            "period": {
                "id": "PP-1",
                "employee_id": "EMP-0001",
                "start_date": "2026-01-01",
                "end_date": "2026-01-31"
            },
            "records": {
                "attendance": [
                    {"date": "2026-01-05", "working_hours": "8", "payment_hours": "8"}
                ],
                "shift_assignments": [
                    {
                        "shift": {"name": "Day", "start_time": "09:00:00", "end_time": "17:00:00"},
                        "start_date": "2025-01-01"
                    }
                ]
            }
        }"#;
        let request: ReconcileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.period.employee_id, "EMP-0001");
        assert_eq!(request.records.attendance.len(), 1);
        assert!(request.records.overtime.is_empty());
        assert!(request.records.holiday_dates.is_none());
        assert!(request.records.shift_assignments[0].end_date.is_none());
    }

    #[test]
    fn test_records_default_when_absent() {
        let json = r#"{
            "period": {
                "id": "PP-1",
                "employee_id": "EMP-0001",
                "start_date": "2026-01-01",
                "end_date": "2026-01-31"
            }
        }"#;
        let request: ReconcileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.records, EmployeeRecords::default());
    }
}
