//! Configuration loading for the hour reconciler.
//!
//! Settings are read once per batch from a YAML file and passed explicitly
//! into the reconciler; nothing is looked up by name while a period is
//! being processed.
//!
//! # Example
//!
//! ```no_run
//! use hour_reconciler::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/reconciliation.yaml").unwrap();
//! println!("Cap: {}", config.config().maximum_monthly_hours());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ReconciliationConfig, ReconciliationSettings};
