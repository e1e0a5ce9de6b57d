//! HTTP API module for the hour reconciler.
//!
//! This module exposes the reconciliation over REST so a payroll front end can
//! preview a single pay period or reconcile a whole payroll entry at once.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchReconcileRequest, ReconcileRequest};
pub use response::{ApiError, BatchReconcileResponse, FailedPeriod};
pub use state::AppState;
