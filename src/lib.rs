//! Pay-period working hour reconciliation.
//!
//! This crate reconciles an employee's attendance, overtime timesheets and leave
//! for a pay period into billable regular hours and two overtime buckets, with
//! regular hours capped at a configured monthly maximum.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod reconciler;
