//! Response types for the reconciliation API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ReconcileError;
use crate::models::PeriodReconciliationResult;
use crate::reconciler::PeriodFailure;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<&ReconcileError> for ApiErrorResponse {
    fn from(error: &ReconcileError) -> Self {
        let status = match error {
            ReconcileError::NoShiftAssignment { .. } | ReconcileError::InvalidInput { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ReconcileError::DataAccess { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let details = match error {
            ReconcileError::NoShiftAssignment { .. } => {
                "Assign a shift covering the pay period before reconciling"
            }
            ReconcileError::InvalidInput { .. } => "Correct the source records and reconcile again",
            ReconcileError::Persistence { .. } => "The pay period record was not changed",
            _ if error.is_configuration_error() => "Check the reconciliation settings",
            _ => "The source records could not be read",
        };
        ApiErrorResponse {
            status,
            error: ApiError::with_details(error.code(), error.to_string(), details),
        }
    }
}

impl From<ReconcileError> for ApiErrorResponse {
    fn from(error: ReconcileError) -> Self {
        ApiErrorResponse::from(&error)
    }
}

/// A failed pay period in a batch response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedPeriod {
    /// The pay period record that failed.
    pub period_id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// What went wrong.
    pub error: ApiError,
}

impl From<&PeriodFailure> for FailedPeriod {
    fn from(failure: &PeriodFailure) -> Self {
        Self {
            period_id: failure.period_id.clone(),
            employee_id: failure.employee_id.clone(),
            error: ApiErrorResponse::from(&failure.error).error,
        }
    }
}

/// Response body for `POST /reconcile/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReconcileResponse {
    /// Correlation id of the run.
    pub run_id: Uuid,
    /// Results written, in processing order.
    pub persisted: Vec<PeriodReconciliationResult>,
    /// Periods with nothing to write.
    pub skipped: Vec<String>,
    /// Periods that failed.
    pub failures: Vec<FailedPeriod>,
}
