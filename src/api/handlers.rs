//! HTTP request handlers for the reconciliation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::reconciler::{HourReconciler, InMemoryDataSource, InMemoryStore};

use super::request::{BatchReconcileRequest, ReconcileRequest};
use super::response::{ApiError, ApiErrorResponse, BatchReconcileResponse, FailedPeriod};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile_handler))
        .route("/reconcile/batch", post(reconcile_batch_handler))
        .with_state(state)
}

/// Handler for POST /reconcile.
///
/// Computes the reconciled hours for one pay period and returns them without
/// writing anything.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconcile request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let period = request.period;
    let source = InMemoryDataSource::new().with_employee(period.employee_id.clone(), request.records);
    let reconciler = HourReconciler::new(state.config().clone(), source, InMemoryStore::new());

    let start_time = Instant::now();
    match reconciler.compute_period(&period) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                period_id = %period.id,
                employee_id = %period.employee_id,
                regular_working_hours = %result.regular_working_hours,
                duration_us = start_time.elapsed().as_micros(),
                "Reconciliation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                period_id = %period.id,
                error = %err,
                "Reconciliation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /reconcile/batch.
///
/// Reconciles every period in the request. Failing periods are reported
/// alongside the successful ones rather than failing the request.
async fn reconcile_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchReconcileRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch reconcile request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let source = InMemoryDataSource::from(request.employees);
    let mut reconciler = HourReconciler::new(state.config().clone(), source, InMemoryStore::new());

    let start_time = Instant::now();
    let report = reconciler.reconcile_batch(&request.periods);
    let mut results = reconciler.into_store().into_results();

    let response = BatchReconcileResponse {
        run_id: report.run_id,
        persisted: report
            .persisted
            .iter()
            .filter_map(|id| results.remove(id))
            .collect(),
        skipped: report.skipped.clone(),
        failures: report.failures.iter().map(FailedPeriod::from).collect(),
    };

    info!(
        correlation_id = %correlation_id,
        run_id = %report.run_id,
        periods = request.periods.len(),
        failed = response.failures.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Batch reconciliation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
